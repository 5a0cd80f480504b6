//! Granting another user access to one test.

#[cfg(test)]
#[path = "sharing_test.rs"]
mod sharing_test;

use crate::net::backend::{Backend, BackendError};
use crate::services::companies::profile_id_by_email;
use crate::util::i18n;

const TABLE: &str = "test_shares";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("no profile with that e-mail")]
    UserNotFound,
    #[error("test already shared with this user")]
    AlreadyShared,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ShareError {
    pub fn user_message(&self) -> String {
        match self {
            Self::UserNotFound => i18n::USER_NOT_FOUND.to_owned(),
            Self::AlreadyShared => i18n::ALREADY_SHARED.to_owned(),
            Self::Backend(e) => e.user_message(),
        }
    }
}

/// Share `test_id` with the user registered under `email`. A duplicate share
/// is reported by the backend's unique key on `(test_id, shared_with_user_id)`.
pub async fn share_test<B: Backend>(backend: &B, test_id: &str, email: &str) -> Result<(), ShareError> {
    let user_id = profile_id_by_email(backend, email).await?.ok_or(ShareError::UserNotFound)?;
    let row = serde_json::json!([{ "test_id": test_id, "shared_with_user_id": user_id }]);
    match backend.insert(TABLE, row).await {
        Ok(()) => Ok(()),
        Err(BackendError::Conflict { .. }) => Err(ShareError::AlreadyShared),
        Err(e) => Err(e.into()),
    }
}
