//! Company membership: the caller's companies, rosters, invites and removals.
//!
//! DESIGN
//! ======
//! Companies are always reached through the caller's membership rows
//! (memberships first, then companies by id set), never by scanning the
//! companies table. Company creation goes through one RPC that also grants
//! the creator an admin membership.

#[cfg(test)]
#[path = "companies_test.rs"]
mod companies_test;

use serde::Deserialize;

use crate::net::backend::{Backend, BackendError};
use crate::net::query::{Direction, Query};
use crate::net::types::{Company, CompanyMember, MemberRole, ProfileId};
use crate::util::i18n;

pub(crate) const MEMBERS_TABLE: &str = "company_members";
const MEMBER_PROJECTION: &str = "id,user_id,role,profiles!inner(email)";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MembershipError {
    #[error("no profile with that e-mail")]
    UserNotFound,
    #[error("user is already a member")]
    AlreadyMember,
    #[error("not signed in")]
    NoSession,
    #[error("the backend returned no company")]
    NoCompanyCreated,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl MembershipError {
    pub fn user_message(&self) -> String {
        match self {
            Self::UserNotFound => i18n::USER_NOT_FOUND.to_owned(),
            Self::AlreadyMember => i18n::ALREADY_MEMBER.to_owned(),
            Self::NoSession => i18n::NOT_SIGNED_IN.to_owned(),
            Self::NoCompanyCreated => i18n::NO_COMPANY_CREATED.to_owned(),
            Self::Backend(e) => e.user_message(),
        }
    }
}

#[derive(Deserialize)]
struct MembershipRef {
    company_id: String,
}

/// Ids of every company `user_id` belongs to.
pub(crate) async fn member_company_ids<B: Backend>(backend: &B, user_id: &str) -> Result<Vec<String>, BackendError> {
    let rows: Vec<MembershipRef> = backend
        .fetch(&Query::table(MEMBERS_TABLE).select("company_id").eq("user_id", user_id))
        .await?;
    Ok(rows.into_iter().map(|m| m.company_id).collect())
}

/// Companies the user is a member of, by name. No memberships means no
/// companies query at all.
pub async fn list_member_companies<B: Backend>(backend: &B, user_id: &str) -> Result<Vec<Company>, BackendError> {
    let ids = member_company_ids(backend, user_id).await?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    backend
        .fetch(
            &Query::table("companies")
                .select("*")
                .is_in("id", ids)
                .order("name", Direction::Asc),
        )
        .await
}

pub async fn list_members<B: Backend>(backend: &B, company_id: &str) -> Result<Vec<CompanyMember>, BackendError> {
    backend
        .fetch(&Query::table(MEMBERS_TABLE).select(MEMBER_PROJECTION).eq("company_id", company_id))
        .await
}

/// Create a company with `user_id` as its admin.
pub async fn create_company<B: Backend>(backend: &B, name: &str, user_id: Option<&str>) -> Result<(), MembershipError> {
    let admin_id = user_id.ok_or(MembershipError::NoSession)?;
    let created = backend
        .rpc(
            "create_company_with_admin",
            serde_json::json!({ "company_name": name.trim(), "admin_id": admin_id }),
        )
        .await?;
    if created.is_null() {
        return Err(MembershipError::NoCompanyCreated);
    }
    Ok(())
}

/// Resolve a profile id by e-mail. Only a missing row maps to `UserNotFound`.
pub(crate) async fn profile_id_by_email<B: Backend>(backend: &B, email: &str) -> Result<Option<String>, BackendError> {
    match backend
        .fetch_one::<ProfileId>(&Query::table("profiles").select("id").eq("email", email.trim()))
        .await
    {
        Ok(profile) => Ok(Some(profile.id)),
        Err(BackendError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Invite an existing user into `company_id` with the `member` role.
pub async fn add_member<B: Backend>(backend: &B, company_id: &str, email: &str) -> Result<(), MembershipError> {
    let user_id = profile_id_by_email(backend, email)
        .await?
        .ok_or(MembershipError::UserNotFound)?;

    let existing = backend
        .select(
            &Query::table(MEMBERS_TABLE)
                .select("id")
                .eq("company_id", company_id)
                .eq("user_id", user_id.as_str()),
        )
        .await?;
    if !existing.is_empty() {
        return Err(MembershipError::AlreadyMember);
    }

    let row = serde_json::json!([{ "company_id": company_id, "user_id": user_id, "role": MemberRole::Member }]);
    match backend.insert(MEMBERS_TABLE, row).await {
        Ok(()) => Ok(()),
        // Lost a race with a concurrent invite.
        Err(BackendError::Conflict { .. }) => Err(MembershipError::AlreadyMember),
        Err(e) => Err(e.into()),
    }
}

pub async fn remove_member<B: Backend>(backend: &B, member_id: &str) -> Result<(), BackendError> {
    backend.delete(&Query::table(MEMBERS_TABLE).eq("id", member_id)).await
}
