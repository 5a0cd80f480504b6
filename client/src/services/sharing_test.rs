use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::fake::FakeBackend;

fn backend() -> FakeBackend {
    let backend = FakeBackend::new();
    backend.seed("profiles", vec![json!({ "id": "u2", "email": "ola@example.no" })]);
    backend.unique(TABLE, &["test_id", "shared_with_user_id"]);
    backend
}

#[test]
fn share_inserts_row_for_resolved_profile() {
    let backend = backend();

    block_on(share_test(&backend, "t1", "ola@example.no")).unwrap();

    let rows = backend.rows(TABLE);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["test_id"], "t1");
    assert_eq!(rows[0]["shared_with_user_id"], "u2");
}

#[test]
fn second_share_is_already_shared() {
    let backend = backend();
    block_on(share_test(&backend, "t1", "ola@example.no")).unwrap();

    let err = block_on(share_test(&backend, "t1", "ola@example.no")).unwrap_err();

    assert_eq!(err, ShareError::AlreadyShared);
    assert_eq!(err.user_message(), "Testen er allerede delt med denne brukeren");
    assert_eq!(backend.rows(TABLE).len(), 1);
}

#[test]
fn already_shared_is_distinct_from_other_failures() {
    let backend = backend();
    backend.fail("insert:test_shares", BackendError::Http { status: 500, code: None, message: String::new() });

    let err = block_on(share_test(&backend, "t1", "ola@example.no")).unwrap_err();

    assert!(matches!(err, ShareError::Backend(BackendError::Http { status: 500, .. })));
    assert_ne!(err.user_message(), i18n::ALREADY_SHARED);
}

#[test]
fn unknown_email_is_user_not_found_without_insert() {
    let backend = backend();
    assert_eq!(block_on(share_test(&backend, "t1", "ukjent@example.no")).unwrap_err(), ShareError::UserNotFound);
    assert!(!backend.called("insert:test_shares"));
}

#[test]
fn same_user_can_be_shared_other_tests() {
    let backend = backend();
    block_on(share_test(&backend, "t1", "ola@example.no")).unwrap();
    block_on(share_test(&backend, "t2", "ola@example.no")).unwrap();
    assert_eq!(backend.rows(TABLE).len(), 2);
}
