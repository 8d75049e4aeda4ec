use yewdux::prelude::*;

use crate::session::{BrowserSession, SessionStore};

#[derive(Clone, PartialEq, Store)]
pub struct State {
    /// Mirror of the stored session flag, so views re-render on login and
    /// logout.
    pub session_email: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            session_email: BrowserSession.load(),
        }
    }
}

impl State {
    pub fn is_admin(&self) -> bool {
        self.session_email.is_some()
    }

    pub fn login(&mut self, email: String) {
        self.session_email = Some(email);
    }

    pub fn logout(&mut self) {
        BrowserSession.clear();
        self.session_email = None;
    }
}
