//! HTTP implementation of `Backend` against the managed backend's REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session persisted in
//! `localStorage`.
//! Server-side (SSR): stubs returning `BackendError::Unavailable`, since these
//! calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses are classified once in `classify_error` so callers
//! see `Conflict`/`NotFound`/`Auth` instead of raw status codes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Deserialize;

use super::backend::{Backend, BackendError, Credentials, UNIQUE_VIOLATION};
use super::config::BackendConfig;
use super::query::Query;
use super::types::{Session, User};
use crate::state::session_store::SessionStore;
use crate::util::fragment::FragmentTokens;

/// `localStorage` key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "testlab.session";

#[cfg(any(test, feature = "hydrate"))]
const SIGN_UP_PATH: &str = "/auth/v1/signup";
#[cfg(any(test, feature = "hydrate"))]
const PASSWORD_GRANT_PATH: &str = "/auth/v1/token?grant_type=password";
#[cfg(any(test, feature = "hydrate"))]
const REFRESH_GRANT_PATH: &str = "/auth/v1/token?grant_type=refresh_token";
#[cfg(any(test, feature = "hydrate"))]
const USER_PATH: &str = "/auth/v1/user";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_PATH: &str = "/auth/v1/logout";

/// Token grant response from the auth surface.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    expires_at: Option<u64>,
    user: User,
}

#[cfg(any(test, feature = "hydrate"))]
fn rest_table_path(table: &str) -> String {
    format!("/rest/v1/{table}")
}

#[cfg(any(test, feature = "hydrate"))]
fn rpc_path(function: &str) -> String {
    format!("/rest/v1/rpc/{function}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_body(credentials: &Credentials) -> serde_json::Value {
    serde_json::json!({
        "email": credentials.email,
        "password": credentials.password,
        "data": { "email": credentials.email },
    })
}

/// Build a session from a token grant. An absolute `expires_at` wins over
/// `expires_in`.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_token_response(resp: TokenResponse, now_secs: u64) -> Session {
    let expires_at = resp
        .expires_at
        .or_else(|| resp.expires_in.map(|secs| now_secs + secs));
    Session { access_token: resp.access_token, refresh_token: resp.refresh_token, expires_at, user: resp.user }
}

/// Which surface produced an error response.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Surface {
    Auth,
    Data,
}

/// Map a non-success response to a `BackendError`.
#[cfg(any(test, feature = "hydrate"))]
fn classify_error(status: u16, body: &str, surface: Surface) -> BackendError {
    let parsed = serde_json::from_str::<serde_json::Value>(body).unwrap_or_default();
    let text = |key: &str| parsed.get(key).and_then(serde_json::Value::as_str).map(str::to_owned);
    let message = text("message")
        .or_else(|| text("msg"))
        .or_else(|| text("error_description"))
        .or_else(|| text("error"))
        .unwrap_or_default();
    let code = parsed.get("code").and_then(|c| match c {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    });

    // Only the unique-violation code, or a 409 without a code, is a duplicate.
    if code.as_deref() == Some(UNIQUE_VIOLATION) || (status == 409 && code.is_none()) {
        return BackendError::Conflict { message };
    }
    if code.as_deref() == Some("PGRST116") || status == 406 || status == 404 {
        return BackendError::NotFound(message);
    }
    match (surface, status) {
        (Surface::Auth, 400 | 401 | 403 | 422) | (Surface::Data, 401) => BackendError::Auth { message },
        _ => BackendError::Http { status, code, message },
    }
}

/// `Backend` over HTTP. Cheap to clone; clones share the session store.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    config: Arc<BackendConfig>,
    sessions: SessionStore,
}

impl HttpBackend {
    pub fn new(config: BackendConfig, sessions: SessionStore) -> Self {
        Self { config: Arc::new(config), sessions }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder, Response};

    use super::*;

    fn network(err: gloo_net::Error) -> BackendError {
        BackendError::Network(err.to_string())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(super) fn now_secs() -> u64 {
        (js_sys::Date::now() / 1000.0) as u64
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub(super) fn load_stored_session() -> Option<Session> {
        let raw = storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }

    pub(super) fn persist_session(session: Option<&Session>) {
        let Some(storage) = storage() else {
            return;
        };
        let result = match session.map(serde_json::to_string) {
            Some(Ok(raw)) => storage.set_item(SESSION_STORAGE_KEY, &raw),
            Some(Err(e)) => {
                leptos::logging::warn!("session not persisted: {e}");
                return;
            }
            None => storage.remove_item(SESSION_STORAGE_KEY),
        };
        if result.is_err() {
            leptos::logging::warn!("localStorage unavailable; session not persisted");
        }
    }

    async fn ensure_ok(resp: Response, surface: Surface) -> Result<Response, BackendError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(classify_error(status, &body, surface))
    }

    impl HttpBackend {
        fn with_keys(&self, builder: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
            let bearer = bearer.map_or_else(
                || self.sessions.access_token().unwrap_or_else(|| self.config.anon_key.clone()),
                str::to_owned,
            );
            builder
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &format!("Bearer {bearer}"))
        }

        async fn token_grant(&self, path: &str, body: serde_json::Value) -> Result<Session, BackendError> {
            let resp = self
                .with_keys(Request::post(&self.config.endpoint(path)), Some(&self.config.anon_key))
                .json(&body)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            let resp = ensure_ok(resp, Surface::Auth).await?;
            let token: TokenResponse = resp.json().await.map_err(|e| BackendError::Decode(e.to_string()))?;
            Ok(session_from_token_response(token, now_secs()))
        }

        pub(super) async fn http_current_session(&self) -> Result<Option<Session>, BackendError> {
            let Some(session) = self.sessions.current().or_else(load_stored_session) else {
                return Ok(None);
            };
            if !session.is_expired(now_secs()) {
                return Ok(Some(session));
            }
            let Some(refresh_token) = session.refresh_token.clone() else {
                persist_session(None);
                return Ok(None);
            };
            match self
                .token_grant(REFRESH_GRANT_PATH, serde_json::json!({ "refresh_token": refresh_token }))
                .await
            {
                Ok(fresh) => {
                    persist_session(Some(&fresh));
                    Ok(Some(fresh))
                }
                Err(BackendError::Auth { .. }) => {
                    persist_session(None);
                    Ok(None)
                }
                Err(e) => Err(e),
            }
        }

        pub(super) async fn http_session_from_tokens(
            &self,
            tokens: &FragmentTokens,
        ) -> Result<Option<Session>, BackendError> {
            let resp = self
                .with_keys(Request::get(&self.config.endpoint(USER_PATH)), Some(&tokens.access_token))
                .send()
                .await
                .map_err(network)?;
            let user: User = match ensure_ok(resp, Surface::Auth).await {
                Ok(resp) => resp.json().await.map_err(|e| BackendError::Decode(e.to_string()))?,
                Err(BackendError::Auth { .. }) => return Ok(None),
                Err(e) => return Err(e),
            };
            let session = Session {
                access_token: tokens.access_token.clone(),
                refresh_token: tokens.refresh_token.clone(),
                expires_at: tokens.expires_in.map(|secs| now_secs() + secs),
                user,
            };
            persist_session(Some(&session));
            Ok(Some(session))
        }

        pub(super) async fn http_sign_up(&self, credentials: &Credentials) -> Result<(), BackendError> {
            let resp = self
                .with_keys(Request::post(&self.config.endpoint(SIGN_UP_PATH)), Some(&self.config.anon_key))
                .json(&sign_up_body(credentials))
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            ensure_ok(resp, Surface::Auth).await.map(|_| ())
        }

        pub(super) async fn http_sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError> {
            let body = serde_json::json!({ "email": credentials.email, "password": credentials.password });
            let session = self.token_grant(PASSWORD_GRANT_PATH, body).await?;
            persist_session(Some(&session));
            Ok(session)
        }

        pub(super) async fn http_sign_out(&self) -> Result<(), BackendError> {
            let sent = self
                .with_keys(Request::post(&self.config.endpoint(LOGOUT_PATH)), None)
                .send()
                .await
                .map_err(network);
            persist_session(None);
            ensure_ok(sent?, Surface::Auth).await.map(|_| ())
        }

        pub(super) async fn http_select(&self, query: &Query) -> Result<Vec<serde_json::Value>, BackendError> {
            let mut builder = self.with_keys(Request::get(&self.config.endpoint(&query.path())), None);
            if query.is_single() {
                builder = builder.header("Accept", "application/vnd.pgrst.object+json");
            }
            let resp = builder.send().await.map_err(network)?;
            let resp = ensure_ok(resp, Surface::Data).await?;
            let body: serde_json::Value = resp.json().await.map_err(|e| BackendError::Decode(e.to_string()))?;
            match body {
                serde_json::Value::Array(rows) => Ok(rows),
                row @ serde_json::Value::Object(_) => Ok(vec![row]),
                other => Err(BackendError::Decode(format!("expected rows, got {other}"))),
            }
        }

        pub(super) async fn http_insert(&self, table: &str, rows: serde_json::Value) -> Result<(), BackendError> {
            let resp = self
                .with_keys(Request::post(&self.config.endpoint(&rest_table_path(table))), None)
                .header("Prefer", "return=minimal")
                .json(&rows)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            ensure_ok(resp, Surface::Data).await.map(|_| ())
        }

        pub(super) async fn http_delete(&self, query: &Query) -> Result<(), BackendError> {
            let url = format!(
                "{}?{}",
                self.config.endpoint(&rest_table_path(query.table_name())),
                query.filter_string()
            );
            let resp = self
                .with_keys(Request::delete(&url), None)
                .send()
                .await
                .map_err(network)?;
            ensure_ok(resp, Surface::Data).await.map(|_| ())
        }

        pub(super) async fn http_rpc(
            &self,
            function: &str,
            args: serde_json::Value,
        ) -> Result<serde_json::Value, BackendError> {
            let resp = self
                .with_keys(Request::post(&self.config.endpoint(&rpc_path(function))), None)
                .json(&args)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            let resp = ensure_ok(resp, Surface::Data).await?;
            let text = resp.text().await.map_err(network)?;
            if text.trim().is_empty() {
                return Ok(serde_json::Value::Null);
            }
            serde_json::from_str(&text).map_err(|e| BackendError::Decode(e.to_string()))
        }
    }
}

impl Backend for HttpBackend {
    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.http_current_session().await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    async fn session_from_tokens(&self, tokens: &FragmentTokens) -> Result<Option<Session>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.http_session_from_tokens(tokens).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = tokens;
            Err(BackendError::Unavailable)
        }
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.http_sign_up(credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(BackendError::Unavailable)
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.http_sign_in(credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(BackendError::Unavailable)
        }
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.http_sign_out().await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(BackendError::Unavailable)
        }
    }

    async fn select(&self, query: &Query) -> Result<Vec<serde_json::Value>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.http_select(query).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(BackendError::Unavailable)
        }
    }

    async fn insert(&self, table: &str, rows: serde_json::Value) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.http_insert(table, rows).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (table, rows);
            Err(BackendError::Unavailable)
        }
    }

    async fn delete(&self, query: &Query) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.http_delete(query).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(BackendError::Unavailable)
        }
    }

    async fn rpc(&self, function: &str, args: serde_json::Value) -> Result<serde_json::Value, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            self.http_rpc(function, args).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (function, args);
            Err(BackendError::Unavailable)
        }
    }
}
