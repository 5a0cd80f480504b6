use super::*;

#[test]
fn marker_detected_anywhere_in_fragment() {
    assert!(has_token_marker("#access_token=abc&type=signup"));
    assert!(has_token_marker("#type=signup&access_token=abc"));
    assert!(!has_token_marker("#error=access_denied"));
    assert!(!has_token_marker(""));
}

#[test]
fn parse_fragment_reads_all_known_keys() {
    let tokens = parse_fragment("#access_token=abc&refresh_token=def&expires_in=3600&type=signup").unwrap();
    assert_eq!(
        tokens,
        FragmentTokens {
            access_token: "abc".to_owned(),
            refresh_token: Some("def".to_owned()),
            expires_in: Some(3600),
            kind: Some("signup".to_owned()),
        }
    );
}

#[test]
fn parse_fragment_without_hash_prefix() {
    let tokens = parse_fragment("access_token=abc").unwrap();
    assert_eq!(tokens.access_token, "abc");
    assert_eq!(tokens.refresh_token, None);
    assert_eq!(tokens.expires_in, None);
}

#[test]
fn parse_fragment_requires_non_empty_access_token() {
    assert_eq!(parse_fragment("#access_token=&type=signup"), None);
    assert_eq!(parse_fragment("#type=signup"), None);
    assert_eq!(parse_fragment(""), None);
}

#[test]
fn parse_fragment_ignores_bad_expiry_and_stray_pairs() {
    let tokens = parse_fragment("#access_token=abc&expires_in=soon&junk&x=y").unwrap();
    assert_eq!(tokens.expires_in, None);
}

#[test]
fn parse_fragment_decodes_escaped_values() {
    let tokens = parse_fragment("#access_token=a%2Fb&refresh_token=c+d&type=100%").unwrap();
    assert_eq!(tokens.access_token, "a/b");
    assert_eq!(tokens.refresh_token.as_deref(), Some("c d"));
    assert_eq!(tokens.kind.as_deref(), Some("100%"));
}
