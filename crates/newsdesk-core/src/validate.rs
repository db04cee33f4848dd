//! Field and handle normalization helpers.

use crate::error::{Error, Result};

/// Reject an empty or whitespace-only field with a validation error
/// naming the field.
pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Normalize a user handle: trimmed and lowercased.
///
/// Handles are case-normalized once at registration and compared
/// normalized everywhere else, so `Alice` and `alice` are the same
/// identity.
pub fn normalize_handle(handle: &str) -> String {
    handle.trim().to_lowercase()
}

/// Normalize an email address: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Normalize a tag list into a duplicate-free, order-stable set.
///
/// `None` (a non-array tags payload on the wire) coerces to an empty
/// set rather than an error.
pub fn normalize_tags(tags: Option<Vec<String>>) -> Vec<String> {
    let mut seen = Vec::new();
    for tag in tags.unwrap_or_default() {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}
