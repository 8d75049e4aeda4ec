use crate::{FeedbackId, NewsId, requests::LoginCredentials};
use serde::{Deserialize, Serialize};

/// Row of `GET /news`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsSummary {
    pub id: NewsId,
    pub title: String,
}

/// A full news post as returned by `GET /news/:id`.
///
/// Subject and email body only exist for posts created with a newsletter
/// email attached; the public detail view ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPost {
    pub id: NewsId,
    #[serde(default)]
    pub title: String,
    /// Markdown source. Missing bodies deserialize as empty.
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_body: Option<String>,
}

impl From<&NewsPost> for NewsSummary {
    fn from(post: &NewsPost) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
        }
    }
}

/// Reader feedback attached to one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub email: String,
    pub feedback: String,
    pub stars: u8,
}

/// One entry of the static `logins.json` asset.
///
/// Demo authentication only: the list is plaintext and readable by anyone
/// who can load the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRecord {
    pub email: String,
    pub password: String,
}

impl LoginRecord {
    pub fn matches(&self, credentials: &LoginCredentials) -> bool {
        self.email == credentials.email && self.password == credentials.password
    }
}

/// Exact-match lookup of credentials against the demo login list.
pub fn find_login<'a>(
    records: &'a [LoginRecord],
    credentials: &LoginCredentials,
) -> Option<&'a LoginRecord> {
    records.iter().find(|record| record.matches(credentials))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_post_tolerates_missing_fields() {
        let post: NewsPost =
            serde_json::from_str(r#"{"id": 3, "title": "Hello"}"#).unwrap();
        assert_eq!(post.id, NewsId::from("3"));
        assert_eq!(post.body, "");
        assert_eq!(post.subject, None);
        assert_eq!(post.email_body, None);
    }

    #[test]
    fn news_post_reads_email_body() {
        let post: NewsPost = serde_json::from_str(
            r#"{"id":"a","title":"T","body":"B","subject":"S","emailBody":"E"}"#,
        )
        .unwrap();
        assert_eq!(post.subject.as_deref(), Some("S"));
        assert_eq!(post.email_body.as_deref(), Some("E"));
    }

    #[test]
    fn login_lookup_is_exact() {
        let records = vec![
            LoginRecord {
                email: "admin@example.com".into(),
                password: "secret".into(),
            },
            LoginRecord {
                email: "editor@example.com".into(),
                password: "hunter2".into(),
            },
        ];
        let good = LoginCredentials {
            email: "editor@example.com".into(),
            password: "hunter2".into(),
        };
        let wrong_case = LoginCredentials {
            email: "Editor@example.com".into(),
            password: "hunter2".into(),
        };
        let wrong_password = LoginCredentials {
            email: "admin@example.com".into(),
            password: "hunter2".into(),
        };

        assert_eq!(
            find_login(&records, &good).map(|r| r.email.as_str()),
            Some("editor@example.com")
        );
        assert!(find_login(&records, &wrong_case).is_none());
        assert!(find_login(&records, &wrong_password).is_none());
        assert!(find_login(&[], &good).is_none());
    }
}
