//! Form field normalization shared by the creation forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Optional text input: blank becomes `None`, otherwise the trimmed value.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Required text input: the trimmed value, or `None` when blank.
///
/// Inputs carry the `required` attribute, so this only guards against
/// whitespace-only submissions.
pub fn required_text(raw: &str) -> Option<String> {
    optional_text(raw)
}
