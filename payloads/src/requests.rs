use crate::{NewsId, NewsPost};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const TITLE_MIN_LEN: usize = 5;
pub const BODY_MIN_LEN: usize = 20;
pub const EMAIL_BODY_MIN_LEN: usize = 20;
pub const STARS_MIN: u8 = 1;
pub const STARS_MAX: u8 = 5;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern")
});

/// Validation result for email addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidation {
    Valid,
    Empty,
    Malformed,
}

impl EmailValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Email is required"),
            Self::Malformed => Some("Please enter a valid email address"),
        }
    }
}

/// Validate an email address against a `local@domain.tld` shape.
pub fn validate_email(email: &str) -> EmailValidation {
    if email.trim().is_empty() {
        return EmailValidation::Empty;
    }
    if !EMAIL_PATTERN.is_match(email) {
        return EmailValidation::Malformed;
    }
    EmailValidation::Valid
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscribe {
    pub email: String,
}

impl Subscribe {
    /// Build a subscription request, or the inline message to show instead.
    pub fn new(email: &str) -> Result<Self, &'static str> {
        match validate_email(email).error_message() {
            Some(message) => Err(message),
            None => Ok(Self {
                email: email.to_string(),
            }),
        }
    }
}

/// Body of `POST /news`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNews {
    pub title: String,
    pub body: String,
    pub subject: String,
    pub email_body: String,
}

/// Body of `PATCH /news/:id`.
///
/// Editing never re-sends the newsletter email, so subject and email body
/// only carry whatever the post was loaded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNews {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_body: Option<String>,
}

/// Body of `POST /news/:id/feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFeedback {
    pub email: String,
    pub feedback: String,
    pub stars: u8,
}

/// Credentials typed into the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Reader feedback form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub email: String,
    pub feedback: String,
    /// 0 means no rating has been picked yet.
    pub stars: u8,
}

/// Per-field errors for [`FeedbackForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackFormErrors {
    pub email: Option<&'static str>,
    pub feedback: Option<&'static str>,
    pub stars: Option<&'static str>,
}

impl FeedbackFormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.feedback.is_none() && self.stars.is_none()
    }
}

impl FeedbackForm {
    /// Check every field, returning the request to send or all field errors.
    pub fn validate(&self) -> Result<CreateFeedback, FeedbackFormErrors> {
        let errors = FeedbackFormErrors {
            email: validate_email(&self.email).error_message(),
            feedback: self
                .feedback
                .trim()
                .is_empty()
                .then_some("Feedback is required"),
            stars: (!(STARS_MIN..=STARS_MAX).contains(&self.stars))
                .then_some("Please pick a rating"),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateFeedback {
            email: self.email.clone(),
            feedback: self.feedback.clone(),
            stars: self.stars,
        })
    }
}

/// Whether the post editor creates a new post or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(NewsId),
}

impl EditorMode {
    pub fn from_route_id(id: Option<NewsId>) -> Self {
        match id {
            Some(id) => Self::Edit(id),
            None => Self::Create,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

/// Post editor form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub body: String,
    pub subject: String,
    pub email_body: String,
}

impl From<NewsPost> for PostForm {
    fn from(post: NewsPost) -> Self {
        Self {
            title: post.title,
            body: post.body,
            subject: post.subject.unwrap_or_default(),
            email_body: post.email_body.unwrap_or_default(),
        }
    }
}

/// Per-field errors for [`PostForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFormErrors {
    pub title: Option<String>,
    pub body: Option<String>,
    pub subject: Option<String>,
    pub email_body: Option<String>,
}

impl PostFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.subject.is_none()
            && self.email_body.is_none()
    }
}

/// The request a valid [`PostForm`] turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSubmission {
    Create(CreateNews),
    Update(NewsId, UpdateNews),
}

fn min_length(value: &str, field: &str, min: usize) -> Option<String> {
    let len = value.trim().chars().count();
    if len == 0 {
        Some(format!("{field} is required"))
    } else if len < min {
        Some(format!("{field} must be at least {min} characters"))
    } else {
        None
    }
}

impl PostForm {
    /// Validate for the given mode. The email fields are only checked when
    /// creating, since an edit never dispatches a newsletter.
    pub fn validate(
        &self,
        mode: &EditorMode,
    ) -> Result<PostSubmission, PostFormErrors> {
        let mut errors = PostFormErrors {
            title: min_length(&self.title, "Title", TITLE_MIN_LEN),
            body: min_length(&self.body, "Body", BODY_MIN_LEN),
            ..Default::default()
        };
        if !mode.is_editing() {
            errors.subject = min_length(&self.subject, "Subject", 1);
            errors.email_body =
                min_length(&self.email_body, "Email body", EMAIL_BODY_MIN_LEN);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(match mode {
            EditorMode::Create => PostSubmission::Create(CreateNews {
                title: self.title.clone(),
                body: self.body.clone(),
                subject: self.subject.clone(),
                email_body: self.email_body.clone(),
            }),
            EditorMode::Edit(id) => PostSubmission::Update(
                id.clone(),
                UpdateNews {
                    title: self.title.clone(),
                    body: self.body.clone(),
                    subject: non_empty(&self.subject),
                    email_body: non_empty(&self.email_body),
                },
            ),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
