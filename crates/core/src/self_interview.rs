//! Self-interview field rules.
//!
//! A self-interview is a question the user asks themselves (`title`) and
//! their written answer (`content`). Neither field has a length cap or a
//! uniqueness constraint; both must carry some non-whitespace text.

use crate::error::CoreError;

/// Entity name used in not-found errors and log fields.
pub const ENTITY: &str = "self-interview";

/// Message returned to clients when a self-interview id does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "self-interview not found";

/// Validate a self-interview title (must not be blank).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Self-interview title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a self-interview answer body (must not be blank).
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Self-interview content must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate both fields of an incoming create/update payload.
pub fn validate_fields(title: &str, content: &str) -> Result<(), CoreError> {
    validate_title(title)?;
    validate_content(content)
}
