//! Request-body field checks performed before any store access.

use crate::error::CoreError;

/// Message reported when a required body field is absent or empty.
pub fn missing_field_message(field: &str) -> String {
    format!("Missing `{field}` in request body")
}

/// Return the value of a required text field, or a validation error if it
/// is absent or empty.
///
/// Whitespace-only values are accepted as-is; only the empty string counts
/// as missing.
pub fn require_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(missing_field_message(field))),
    }
}
