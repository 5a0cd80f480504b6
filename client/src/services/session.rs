//! Session lifecycle: sign-up, sign-in, sign-out and change notification.
//!
//! DESIGN
//! ======
//! `SessionManager` pairs a `Backend` with the process-wide `SessionStore`.
//! Every successful call publishes the resulting session to the store, and
//! the store fans it out to subscribers. Nothing here is retried.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::backend::{Backend, BackendError, Credentials};
use crate::net::types::Session;
use crate::state::session_store::{SessionStore, Subscription};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("sign-up failed: {0}")]
    SignUp(BackendError),
    #[error("sign-in failed: {0}")]
    SignIn(BackendError),
    #[error("sign-out failed: {0}")]
    SignOut(BackendError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl SessionError {
    pub fn user_message(&self) -> String {
        match self {
            Self::SignUp(e) | Self::SignIn(e) | Self::SignOut(e) | Self::Backend(e) => e.user_message(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionManager<B> {
    backend: B,
    store: SessionStore,
}

impl<B: Backend> SessionManager<B> {
    pub fn new(backend: B, store: SessionStore) -> Self {
        Self { backend, store }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Resolve the live session and publish it. A failed lookup publishes
    /// `None` so the shell stops waiting, and the error is still returned.
    pub async fn get_current_session(&self) -> Result<Option<Session>, SessionError> {
        match self.backend.current_session().await {
            Ok(session) => {
                self.store.set(session.clone());
                Ok(session)
            }
            Err(e) => {
                self.store.set(None);
                Err(SessionError::Backend(e))
            }
        }
    }

    /// Create the account, then sign in with the same credentials. When the
    /// follow-up sign-in fails the account still exists and the sign-in error
    /// is returned.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        let credentials = Credentials::new(email, password);
        self.backend.sign_up(&credentials).await.map_err(SessionError::SignUp)?;
        self.sign_in_with(&credentials).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        self.sign_in_with(&Credentials::new(email, password)).await
    }

    async fn sign_in_with(&self, credentials: &Credentials) -> Result<Session, SessionError> {
        let session = self.backend.sign_in(credentials).await.map_err(SessionError::SignIn)?;
        self.store.set(Some(session.clone()));
        Ok(session)
    }

    /// End the session. The store is cleared even if the backend call fails.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        let result = self.backend.sign_out().await;
        self.store.set(None);
        result.map_err(SessionError::SignOut)
    }

    pub fn on_session_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&Session>) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }
}
