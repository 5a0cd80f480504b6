//! E-mail confirmation redirect handling.
//!
//! The backend redirects a confirmed sign-up to the app with the session
//! tokens in the address fragment. The tokens are adopted first, then the live
//! session decides the outcome.

#[cfg(test)]
#[path = "confirmation_test.rs"]
mod confirmation_test;

use crate::net::backend::Backend;
use crate::services::session::SessionManager;
use crate::util::fragment::{has_token_marker, parse_fragment};
use crate::util::i18n;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Marker present and a session exists.
    Confirmed,
    /// Marker present but no session.
    NotConfirmed,
    /// No token marker in the fragment.
    InvalidLink,
    /// The session lookup failed.
    Failed,
}

impl CallbackOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Confirmed => i18n::CONFIRM_OK,
            Self::NotConfirmed => i18n::CONFIRM_NO_SESSION,
            Self::InvalidLink => i18n::CONFIRM_INVALID_LINK,
            Self::Failed => i18n::CONFIRM_FAILED,
        }
    }
}

pub async fn confirmation_outcome<B: Backend>(hash: &str, sessions: &SessionManager<B>) -> CallbackOutcome {
    if !has_token_marker(hash) {
        return CallbackOutcome::InvalidLink;
    }
    if let Some(tokens) = parse_fragment(hash) {
        if let Err(e) = sessions.backend().session_from_tokens(&tokens).await {
            leptos::logging::error!("confirmation token exchange failed: {e}");
            return CallbackOutcome::Failed;
        }
    }
    match sessions.get_current_session().await {
        Ok(Some(_)) => CallbackOutcome::Confirmed,
        Ok(None) => CallbackOutcome::NotConfirmed,
        Err(e) => {
            leptos::logging::error!("confirmation session lookup failed: {e}");
            CallbackOutcome::Failed
        }
    }
}
