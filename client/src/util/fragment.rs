//! Address-fragment parsing for e-mail confirmation redirects.
//!
//! The backend redirects a confirmed sign-up to
//! `/#access_token=..&refresh_token=..&expires_in=3600&type=signup`.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

/// Substring that marks a confirmation redirect.
pub const TOKEN_MARKER: &str = "access_token";

/// Tokens carried by a confirmation redirect fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    /// Redirect kind reported by the backend (`signup`, `recovery`, ..).
    pub kind: Option<String>,
}

/// Whether the fragment belongs to a confirmation redirect.
pub fn has_token_marker(hash: &str) -> bool {
    hash.contains(TOKEN_MARKER)
}

/// Parse `#key=value&..` into tokens. `None` without a non-empty `access_token`.
pub fn parse_fragment(hash: &str) -> Option<FragmentTokens> {
    let body = hash.strip_prefix('#').unwrap_or(hash);
    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_in = None;
    let mut kind = None;

    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        let value = value.into_owned();
        match key.as_ref() {
            "access_token" => access_token = Some(value),
            "refresh_token" => refresh_token = Some(value),
            "expires_in" => expires_in = value.parse::<u64>().ok(),
            "type" => kind = Some(value),
            _ => {}
        }
    }

    let access_token = access_token.filter(|t| !t.is_empty())?;
    Some(FragmentTokens {
        access_token,
        refresh_token: refresh_token.filter(|t| !t.is_empty()),
        expires_in,
        kind,
    })
}
