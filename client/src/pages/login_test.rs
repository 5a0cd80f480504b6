use super::*;

#[test]
fn both_fields_are_required() {
    assert!(ready_to_submit("kari@example.no", "pw"));
    assert!(!ready_to_submit("  ", "pw"));
    assert!(!ready_to_submit("kari@example.no", ""));
}

#[test]
fn whitespace_password_is_accepted_verbatim() {
    assert!(ready_to_submit("kari@example.no", " "));
}
