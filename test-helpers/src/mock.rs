//! Demo data for the dev-server.
//!
//! A handful of posts exercising the Markdown extensions news bodies use,
//! a couple of subscribers, and some reader feedback.

use crate::TestApp;
use anyhow::Result;
use payloads::{NewsId, requests};

const SUBSCRIBERS: &[&str] = &["alice@example.com", "bob@example.com"];

/// Development dataset created through the API.
pub struct DevDataset {
    pub posts: Vec<(NewsId, String)>,
    pub feedback_count: usize,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        for email in SUBSCRIBERS {
            app.subscribe_reader(email).await?;
        }

        tracing::info!("📰 Creating demo posts");
        let mut posts = Vec::new();
        for details in demo_posts() {
            let news_id = app.create_post(&details).await?;
            posts.push((news_id, details.title));
        }

        tracing::info!("⭐ Leaving reader feedback");
        let mut feedback_count = 0;
        if let Some((news_id, _)) = posts.first() {
            for (email, feedback, stars) in [
                ("alice@example.com", "Loved the footnotes.", 5),
                ("bob@example.com", "Could use more pictures.", 3),
            ] {
                app.client
                    .submit_feedback(
                        news_id,
                        &requests::CreateFeedback {
                            email: email.into(),
                            feedback: feedback.into(),
                            stars,
                        },
                    )
                    .await?;
                feedback_count += 1;
            }
        }

        Ok(Self {
            posts,
            feedback_count,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available demo data:");
        for (news_id, title) in &self.posts {
            tracing::info!("   📰 {title} ({news_id})");
        }
        tracing::info!("   ⭐ {} feedback entries", self.feedback_count);
        tracing::info!("   👥 Subscribers: {}", SUBSCRIBERS.join(", "));
        for login in mock_api::default_logins() {
            tracing::info!("   🔑 Admin login: {} / {}", login.email, login.password);
        }
    }
}

fn demo_posts() -> Vec<requests::CreateNews> {
    vec![
        requests::CreateNews {
            title: "Welcome to the newsletter".into(),
            body: "\
# Welcome :wave:

Thanks for subscribing! Every issue is written in *Markdown* and supports
a few extras:

- ==highlighted== and ++inserted++ text
- H~2~O and E = mc^2^
- footnotes[^1] and abbreviations like HTML
- links such as https://www.rust-lang.org

Term
: A definition list entry

[^1]: Like this one.

*[HTML]: Hyper Text Markup Language
"
            .into(),
            subject: "Welcome aboard".into(),
            email_body: "Thanks for subscribing to our newsletter!".into(),
        },
        crate::post_details_a(),
        crate::post_details_b(),
    ]
}
