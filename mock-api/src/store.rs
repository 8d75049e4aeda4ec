//! In-memory storage for subscribers, posts and feedback.

use payloads::{
    Feedback, FeedbackId, LoginRecord, NewsId, NewsPost, NewsSummary,
    requests::{self, STARS_MAX, STARS_MIN, validate_email},
};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("News post not found")]
    NewsNotFound,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Email address already subscribed")]
    AlreadySubscribed,
    #[error("Stars must be between {} and {}", STARS_MIN, STARS_MAX)]
    InvalidStars,
    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),
}

/// Newsletter email that would have been sent when a post was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNewsletter {
    pub news_id: NewsId,
    pub subject: String,
    pub email_body: String,
    pub recipients: Vec<String>,
}

#[derive(Default)]
struct Inner {
    subscribers: Vec<String>,
    posts: Vec<NewsPost>,
    feedbacks: HashMap<NewsId, Vec<Feedback>>,
    outbox: Vec<SentNewsletter>,
}

#[derive(Default)]
pub struct Store {
    inner: Mutex<Inner>,
    logins: Vec<LoginRecord>,
}

fn require(value: &str, field: &'static str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::EmptyField(field));
    }
    Ok(())
}

impl Store {
    pub fn new(logins: Vec<LoginRecord>) -> Self {
        Self {
            inner: Mutex::default(),
            logins,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn logins(&self) -> &[LoginRecord] {
        &self.logins
    }

    pub fn subscribe(
        &self,
        details: &requests::Subscribe,
    ) -> Result<(), StoreError> {
        if !validate_email(&details.email).is_valid() {
            return Err(StoreError::InvalidEmail);
        }
        let mut inner = self.lock();
        if inner.subscribers.contains(&details.email) {
            return Err(StoreError::AlreadySubscribed);
        }
        inner.subscribers.push(details.email.clone());
        Ok(())
    }

    pub fn subscribers(&self) -> Vec<String> {
        self.lock().subscribers.clone()
    }

    pub fn list_news(&self) -> Vec<NewsSummary> {
        self.lock().posts.iter().map(NewsSummary::from).collect()
    }

    pub fn get_news(&self, news_id: &NewsId) -> Result<NewsPost, StoreError> {
        self.lock()
            .posts
            .iter()
            .find(|post| &post.id == news_id)
            .cloned()
            .ok_or(StoreError::NewsNotFound)
    }

    /// Store a new post and queue its newsletter for every subscriber.
    pub fn create_news(
        &self,
        details: &requests::CreateNews,
    ) -> Result<NewsId, StoreError> {
        require(&details.title, "title")?;
        require(&details.body, "body")?;
        require(&details.subject, "subject")?;
        require(&details.email_body, "emailBody")?;

        let news_id = NewsId(Uuid::new_v4().to_string());
        let mut inner = self.lock();
        inner.posts.push(NewsPost {
            id: news_id.clone(),
            title: details.title.clone(),
            body: details.body.clone(),
            subject: Some(details.subject.clone()),
            email_body: Some(details.email_body.clone()),
        });
        let recipients = inner.subscribers.clone();
        inner.outbox.push(SentNewsletter {
            news_id: news_id.clone(),
            subject: details.subject.clone(),
            email_body: details.email_body.clone(),
            recipients,
        });
        Ok(news_id)
    }

    pub fn update_news(
        &self,
        news_id: &NewsId,
        details: &requests::UpdateNews,
    ) -> Result<NewsPost, StoreError> {
        require(&details.title, "title")?;
        require(&details.body, "body")?;

        let mut inner = self.lock();
        let post = inner
            .posts
            .iter_mut()
            .find(|post| &post.id == news_id)
            .ok_or(StoreError::NewsNotFound)?;
        post.title = details.title.clone();
        post.body = details.body.clone();
        if let Some(subject) = &details.subject {
            post.subject = Some(subject.clone());
        }
        if let Some(email_body) = &details.email_body {
            post.email_body = Some(email_body.clone());
        }
        Ok(post.clone())
    }

    /// Remove a post along with its feedback.
    pub fn delete_news(&self, news_id: &NewsId) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let before = inner.posts.len();
        inner.posts.retain(|post| &post.id != news_id);
        if inner.posts.len() == before {
            return Err(StoreError::NewsNotFound);
        }
        inner.feedbacks.remove(news_id);
        Ok(())
    }

    pub fn list_feedbacks(
        &self,
        news_id: &NewsId,
    ) -> Result<Vec<Feedback>, StoreError> {
        let inner = self.lock();
        if !inner.posts.iter().any(|post| &post.id == news_id) {
            return Err(StoreError::NewsNotFound);
        }
        Ok(inner.feedbacks.get(news_id).cloned().unwrap_or_default())
    }

    pub fn create_feedback(
        &self,
        news_id: &NewsId,
        details: &requests::CreateFeedback,
    ) -> Result<FeedbackId, StoreError> {
        if !validate_email(&details.email).is_valid() {
            return Err(StoreError::InvalidEmail);
        }
        require(&details.feedback, "feedback")?;
        if !(STARS_MIN..=STARS_MAX).contains(&details.stars) {
            return Err(StoreError::InvalidStars);
        }

        let mut inner = self.lock();
        if !inner.posts.iter().any(|post| &post.id == news_id) {
            return Err(StoreError::NewsNotFound);
        }
        let feedback_id = FeedbackId(Uuid::new_v4().to_string());
        inner
            .feedbacks
            .entry(news_id.clone())
            .or_default()
            .push(Feedback {
                id: feedback_id.clone(),
                email: details.email.clone(),
                feedback: details.feedback.clone(),
                stars: details.stars,
            });
        Ok(feedback_id)
    }

    /// Newsletters queued so far, oldest first.
    pub fn outbox(&self) -> Vec<SentNewsletter> {
        self.lock().outbox.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> requests::CreateNews {
        requests::CreateNews {
            title: title.into(),
            body: "A body that is long enough".into(),
            subject: "Subject".into(),
            email_body: "An email body that is long enough".into(),
        }
    }

    #[test]
    fn duplicate_subscriptions_are_rejected() {
        let store = Store::default();
        let details = requests::Subscribe {
            email: "reader@example.com".into(),
        };
        store.subscribe(&details).unwrap();
        assert!(matches!(
            store.subscribe(&details),
            Err(StoreError::AlreadySubscribed)
        ));
        assert_eq!(store.subscribers(), vec!["reader@example.com"]);
    }

    #[test]
    fn creating_news_queues_newsletter() {
        let store = Store::default();
        store
            .subscribe(&requests::Subscribe {
                email: "reader@example.com".into(),
            })
            .unwrap();
        let news_id = store.create_news(&post("Hello world")).unwrap();

        let outbox = store.outbox();
        assert_eq!(outbox.len(), 1);
        assert_eq!(outbox[0].news_id, news_id);
        assert_eq!(outbox[0].recipients, vec!["reader@example.com"]);
    }

    #[test]
    fn deleting_news_drops_feedback() {
        let store = Store::default();
        let news_id = store.create_news(&post("Hello world")).unwrap();
        store
            .create_feedback(
                &news_id,
                &requests::CreateFeedback {
                    email: "reader@example.com".into(),
                    feedback: "Nice".into(),
                    stars: 4,
                },
            )
            .unwrap();

        store.delete_news(&news_id).unwrap();
        assert!(matches!(
            store.list_feedbacks(&news_id),
            Err(StoreError::NewsNotFound)
        ));
        assert!(matches!(
            store.delete_news(&news_id),
            Err(StoreError::NewsNotFound)
        ));
    }

    #[test]
    fn update_keeps_subject_when_not_sent() {
        let store = Store::default();
        let news_id = store.create_news(&post("Hello world")).unwrap();
        let updated = store
            .update_news(
                &news_id,
                &requests::UpdateNews {
                    title: "Renamed".into(),
                    body: "New body text here".into(),
                    subject: None,
                    email_body: None,
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.subject.as_deref(), Some("Subject"));
    }
}
