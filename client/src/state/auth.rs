#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state mirrored from the `SessionStore` into a signal.
///
/// `loading` stays `true` until the first session lookup resolves.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Apply a session change pushed by the store.
    pub fn apply(&mut self, session: Option<&Session>) {
        self.session = session.cloned();
        self.loading = false;
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.id.as_str())
    }

    pub fn user_email(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.user.email.as_deref())
    }
}
