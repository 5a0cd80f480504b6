//! The seam between the UI and the managed backend.
//!
//! DESIGN
//! ======
//! Views and services talk to a `Backend`, never to HTTP directly. The browser
//! build plugs in `api::HttpBackend`; tests plug in an in-memory fake. The
//! trait covers the whole external contract: session issuance, generic reads
//! with filters/ordering/embedding, inserts, deletes, and named RPCs.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `BackendError`. Unique-constraint violations arrive as
//! `Conflict`, single-row lookups with no match as `NotFound`, so callers can
//! turn them into friendly conditions without inspecting status codes.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::query::Query;
use super::types::Session;
use crate::util::fragment::FragmentTokens;
use crate::util::i18n;

/// Postgres SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("authentication failed: {message}")]
    Auth { message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unique constraint violated: {message}")]
    Conflict { message: String },
    #[error("backend error {status}: {message}")]
    Http { status: u16, code: Option<String>, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("backend not available on the server")]
    Unavailable,
}

impl BackendError {
    /// Short Norwegian sentence suitable for an inline form error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { message } if !message.is_empty() => message.clone(),
            Self::Auth { .. } => i18n::AUTH_FAILED.to_owned(),
            Self::Network(_) | Self::Unavailable => i18n::NETWORK_FAILED.to_owned(),
            Self::NotFound(_) => i18n::NOT_FOUND.to_owned(),
            Self::Conflict { .. } => i18n::ALREADY_EXISTS.to_owned(),
            Self::Http { message, .. } if !message.is_empty() => message.clone(),
            Self::Http { .. } | Self::Decode(_) => i18n::GENERIC_FAILURE.to_owned(),
        }
    }
}

/// E-mail + password pair for sign-up and sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.trim().to_owned(), password: password.to_owned() }
    }
}

/// Request/response contract with the managed backend.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// The live session, if any. Implementations may refresh an expired token.
    async fn current_session(&self) -> Result<Option<Session>, BackendError>;

    /// Establish a session from tokens delivered in a confirmation redirect.
    /// Returns `Ok(None)` when the backend rejects the tokens.
    async fn session_from_tokens(&self, tokens: &FragmentTokens) -> Result<Option<Session>, BackendError>;

    /// Register an account. Does not sign in.
    async fn sign_up(&self, credentials: &Credentials) -> Result<(), BackendError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError>;

    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Read rows matching `query` as raw JSON objects.
    async fn select(&self, query: &Query) -> Result<Vec<serde_json::Value>, BackendError>;

    /// Insert one or more rows (`rows` is a JSON array).
    async fn insert(&self, table: &str, rows: serde_json::Value) -> Result<(), BackendError>;

    /// Delete the rows selected by `query`'s filters.
    async fn delete(&self, query: &Query) -> Result<(), BackendError>;

    /// Invoke a named remote procedure.
    async fn rpc(&self, function: &str, args: serde_json::Value) -> Result<serde_json::Value, BackendError>;

    /// Typed convenience over `select`.
    async fn fetch<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, BackendError> {
        decode_rows(self.select(query).await?)
    }

    /// Typed single-row read. Zero rows is `NotFound`.
    async fn fetch_one<T: DeserializeOwned>(&self, query: &Query) -> Result<T, BackendError> {
        let query = query.clone().single();
        let rows = self.select(&query).await?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::NotFound(query.table_name().to_owned()))?;
        serde_json::from_value(row).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

/// Decode raw JSON rows into `T`, failing on the first mismatched row.
///
/// # Errors
///
/// Returns `BackendError::Decode` if any row does not match `T`.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<serde_json::Value>) -> Result<Vec<T>, BackendError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|e| BackendError::Decode(e.to_string())))
        .collect()
}
