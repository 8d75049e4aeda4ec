//! The session flag: the logged-in email kept in `localStorage`.
//!
//! It only decides which links and call-to-actions are shown. Nothing
//! behind the API trusts it.

use payloads::{ClientError, LoginRecord, requests::LoginCredentials};

use crate::Route;

pub const SESSION_KEY: &str = "userEmail";

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const SERVER_UNREACHABLE: &str = "Could not reach the server";
pub const PASSWORD_RECOVERY_UNAVAILABLE: &str =
    "Password recovery is not implemented yet";

/// Where the session flag lives.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn store(&self, email: &str);
    fn clear(&self);
}

/// `window.localStorage`. Every operation is a no-op when storage is
/// unavailable (private browsing, native tests).
pub struct BrowserSession;

impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSession {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn store(&self, email: &str) {
        if let Some(storage) = Self::storage()
            && let Err(e) = storage.set_item(SESSION_KEY, email)
        {
            tracing::error!("could not store session flag: {e:?}");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(String),
    InvalidCredentials,
    Unreachable,
}

impl LoginOutcome {
    /// Inline message for the login form, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::LoggedIn(_) => None,
            Self::InvalidCredentials => Some(INVALID_CREDENTIALS),
            Self::Unreachable => Some(SERVER_UNREACHABLE),
        }
    }
}

/// Check credentials against the result of fetching `logins.json`.
pub fn check_login(
    logins: Result<Vec<LoginRecord>, ClientError>,
    credentials: &LoginCredentials,
) -> LoginOutcome {
    match logins {
        Ok(records) => {
            match payloads::responses::find_login(&records, credentials) {
                Some(record) => LoginOutcome::LoggedIn(record.email.clone()),
                None => LoginOutcome::InvalidCredentials,
            }
        }
        Err(e) => {
            tracing::error!("fetching logins failed: {e}");
            LoginOutcome::Unreachable
        }
    }
}

/// Apply a login outcome: store the flag and pick the page to open on
/// success, leave everything untouched otherwise.
pub fn complete_login(
    outcome: &LoginOutcome,
    session: &impl SessionStore,
) -> Option<Route> {
    match outcome {
        LoginOutcome::LoggedIn(email) => {
            session.store(email);
            Some(Route::Admin)
        }
        LoginOutcome::InvalidCredentials | LoginOutcome::Unreachable => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemorySession(RefCell<Option<String>>);

    impl SessionStore for MemorySession {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn store(&self, email: &str) {
            *self.0.borrow_mut() = Some(email.to_string());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    fn records() -> Vec<LoginRecord> {
        vec![
            LoginRecord {
                email: "admin@example.com".into(),
                password: "admin123".into(),
            },
            LoginRecord {
                email: "editor@example.com".into(),
                password: "hunter22".into(),
            },
        ]
    }

    fn credentials(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn matching_record_sets_flag_and_opens_admin() {
        let session = MemorySession::default();
        let outcome = check_login(
            Ok(records()),
            &credentials("editor@example.com", "hunter22"),
        );

        assert_eq!(outcome, LoginOutcome::LoggedIn("editor@example.com".into()));
        assert_eq!(complete_login(&outcome, &session), Some(Route::Admin));
        assert_eq!(session.load().as_deref(), Some("editor@example.com"));
    }

    #[test]
    fn wrong_password_leaves_flag_unset() {
        let session = MemorySession::default();
        let outcome = check_login(
            Ok(records()),
            &credentials("admin@example.com", "admin1234"),
        );

        assert_eq!(outcome.error_message(), Some(INVALID_CREDENTIALS));
        assert_eq!(complete_login(&outcome, &session), None);
        assert_eq!(session.load(), None);
    }

    #[test]
    fn match_is_exact() {
        let outcome = check_login(
            Ok(records()),
            &credentials("Admin@example.com", "admin123"),
        );
        assert_eq!(outcome, LoginOutcome::InvalidCredentials);
    }

    #[test]
    fn api_failure_reports_unreachable() {
        let session = MemorySession::default();
        let outcome = check_login(
            Err(ClientError::APIError(
                reqwest::StatusCode::NOT_FOUND,
                "missing".into(),
            )),
            &credentials("admin@example.com", "admin123"),
        );

        assert_eq!(outcome.error_message(), Some(SERVER_UNREACHABLE));
        assert_eq!(complete_login(&outcome, &session), None);
        assert_eq!(session.load(), None);
    }

    #[test]
    fn logout_clears_flag() {
        let session = MemorySession::default();
        session.store("admin@example.com");
        session.clear();
        assert_eq!(session.load(), None);
    }
}
