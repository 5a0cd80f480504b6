use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::fake::FakeBackend;

fn backend_with_profiles() -> FakeBackend {
    let backend = FakeBackend::new();
    backend.seed(
        "profiles",
        vec![
            json!({ "id": "u1", "email": "kari@example.no" }),
            json!({ "id": "u2", "email": "ola@example.no" }),
        ],
    );
    backend.unique(MEMBERS_TABLE, &["company_id", "user_id"]);
    backend
}

#[test]
fn member_companies_are_scoped_by_membership_and_sorted() {
    let backend = backend_with_profiles();
    backend.seed(
        "companies",
        vec![
            json!({ "id": "c1", "name": "Zeta" }),
            json!({ "id": "c2", "name": "Alfa" }),
            json!({ "id": "c3", "name": "Ikke min" }),
        ],
    );
    backend.seed(
        MEMBERS_TABLE,
        vec![
            json!({ "id": "m1", "company_id": "c1", "user_id": "u1", "role": "admin" }),
            json!({ "id": "m2", "company_id": "c2", "user_id": "u1", "role": "member" }),
            json!({ "id": "m3", "company_id": "c3", "user_id": "u2", "role": "admin" }),
        ],
    );

    let companies = block_on(list_member_companies(&backend, "u1")).unwrap();

    let names = companies.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Alfa", "Zeta"]);
    assert_eq!(backend.calls(), vec!["select:company_members", "select:companies"]);
}

#[test]
fn no_memberships_skips_company_query() {
    let backend = backend_with_profiles();
    backend.seed("companies", vec![json!({ "id": "c1", "name": "Zeta" })]);

    assert!(block_on(list_member_companies(&backend, "u1")).unwrap().is_empty());
    assert!(!backend.called("select:companies"));
}

#[test]
fn create_company_grants_admin_membership() {
    let backend = backend_with_profiles();

    block_on(create_company(&backend, "  Testbedrift ", Some("u1"))).unwrap();

    let companies = block_on(list_member_companies(&backend, "u1")).unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Testbedrift");
    let members = block_on(list_members(&backend, &companies[0].id)).unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].role, MemberRole::Admin);
    assert_eq!(members[0].email(), "kari@example.no");
}

#[test]
fn create_company_null_result_is_error() {
    let backend = backend_with_profiles();
    backend.rpc_returns_null();
    let err = block_on(create_company(&backend, "X", Some("u1"))).unwrap_err();
    assert_eq!(err, MembershipError::NoCompanyCreated);
    assert_eq!(err.user_message(), i18n::NO_COMPANY_CREATED);
}

#[test]
fn create_company_requires_session() {
    let backend = backend_with_profiles();
    assert_eq!(block_on(create_company(&backend, "X", None)).unwrap_err(), MembershipError::NoSession);
    assert!(!backend.called("rpc"));
}

#[test]
fn add_member_with_unknown_email_inserts_nothing() {
    let backend = backend_with_profiles();

    let err = block_on(add_member(&backend, "c1", "ukjent@example.no")).unwrap_err();

    assert_eq!(err, MembershipError::UserNotFound);
    assert_eq!(err.user_message(), "Bruker ikke funnet");
    assert!(!backend.called("insert:company_members"));
    assert!(backend.rows(MEMBERS_TABLE).is_empty());
}

#[test]
fn add_member_duplicate_is_rejected_before_insert() {
    let backend = backend_with_profiles();
    backend.seed(MEMBERS_TABLE, vec![json!({ "id": "m1", "company_id": "c1", "user_id": "u2", "role": "member" })]);

    let err = block_on(add_member(&backend, "c1", "ola@example.no")).unwrap_err();

    assert_eq!(err, MembershipError::AlreadyMember);
    assert!(!backend.called("insert:company_members"));
}

#[test]
fn add_member_inserts_member_role() {
    let backend = backend_with_profiles();

    block_on(add_member(&backend, "c1", " ola@example.no ")).unwrap();

    let rows = backend.rows(MEMBERS_TABLE);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["company_id"], "c1");
    assert_eq!(rows[0]["user_id"], "u2");
    assert_eq!(rows[0]["role"], "member");
}

#[test]
fn add_member_profile_lookup_failure_is_not_user_not_found() {
    let backend = backend_with_profiles();
    backend.fail("select:profiles", BackendError::Network("offline".to_owned()));
    let err = block_on(add_member(&backend, "c1", "ola@example.no")).unwrap_err();
    assert_eq!(err, MembershipError::Backend(BackendError::Network("offline".to_owned())));
}

#[test]
fn add_member_conflict_on_insert_is_already_member() {
    let backend = backend_with_profiles();
    backend.fail("insert:company_members", BackendError::Conflict { message: String::new() });
    assert_eq!(
        block_on(add_member(&backend, "c1", "ola@example.no")).unwrap_err(),
        MembershipError::AlreadyMember
    );
}

#[test]
fn remove_member_deletes_only_that_row() {
    let backend = backend_with_profiles();
    backend.seed(
        MEMBERS_TABLE,
        vec![
            json!({ "id": "m1", "company_id": "c1", "user_id": "u1", "role": "admin", "profiles": { "email": "kari@example.no" } }),
            json!({ "id": "m2", "company_id": "c1", "user_id": "u2", "role": "member", "profiles": { "email": "ola@example.no" } }),
        ],
    );

    block_on(remove_member(&backend, "m2")).unwrap();

    let members = block_on(list_members(&backend, "c1")).unwrap();
    assert_eq!(members.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), vec!["m1"]);
    assert_eq!(members[0].role.label(), "Administrator");
}
