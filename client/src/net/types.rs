//! Row DTOs for the managed backend's auth and data surfaces.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's column names so rows decode straight from
//! the REST response. Embedded relations (`company:companies(..)`,
//! `tester:testers(..)`) appear as nested structs under their alias.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login e-mail, when the backend exposes it.
    #[serde(default)]
    pub email: Option<String>,
}

/// Live authenticated-user context issued by the backend.
///
/// Tokens are opaque; the client only cares whether a session is present and
/// whether its access token has expired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry in seconds since the Unix epoch.
    #[serde(default)]
    pub expires_at: Option<u64>,
    pub user: User,
}

impl Session {
    /// Whether the access token is past its expiry at `now_secs`.
    /// Sessions without a known expiry never expire client-side.
    pub fn is_expired(&self, now_secs: u64) -> bool {
        self.expires_at.is_some_and(|at| now_secs >= at)
    }
}

/// A company the current user belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Role granted by a company membership.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    #[default]
    Member,
}

impl MemberRole {
    /// Display label shown in the member roster.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Member => "Medlem",
        }
    }
}

/// Embedded profile fields on a membership row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub email: String,
}

/// A membership row joined with the member's profile e-mail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMember {
    pub id: String,
    pub user_id: String,
    pub role: MemberRole,
    pub profiles: MemberProfile,
}

impl CompanyMember {
    pub fn email(&self) -> &str {
        &self.profiles.email
    }
}

/// Minimal `{id, name}` row used to populate parent selectors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

/// A product under test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Owning company, embedded as `company:companies(id, name)`.
    #[serde(default)]
    pub company: Option<NamedRef>,
}

/// Embedded product name on a test row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductName {
    pub name: String,
}

/// A product test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Parent product, embedded as `product:products(name)`.
    #[serde(default)]
    pub product: Option<ProductName>,
}

/// A test participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tester {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Embedded tester identity on a result row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TesterRef {
    pub name: String,
    pub email: String,
}

/// A single rating submitted by a tester. Read-only in this client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    /// Star rating in `1..=5`.
    pub rating: u8,
    #[serde(default)]
    pub feedback: Option<String>,
    pub created_at: String,
    pub tester: TesterRef,
}

/// Profile id lookup row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileId {
    pub id: String,
}
