//! Required-field checks run before any collaborator call.
//!
//! A value that is absent, empty or whitespace-only counts as missing.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Return the trimmed value of a required field.
pub fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, CoreError> {
    present(value).ok_or_else(|| CoreError::required(field))
}

/// Fail with `"<field> is required"` for the first missing field, in the
/// order given.
pub fn require_all(fields: &[(&str, Option<&str>)]) -> Result<(), CoreError> {
    match missing_fields(fields).first() {
        Some(field) => Err(CoreError::required(field)),
        None => Ok(()),
    }
}

/// Names of every missing field, in the order given.
pub fn missing_fields<'a>(fields: &[(&'a str, Option<&str>)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| present(*value).is_none())
        .map(|(name, _)| *name)
        .collect()
}

/// Check that a present address is syntactically an email address.
pub fn require_email(field: &str, value: &str) -> Result<(), CoreError> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be a valid email address"
        )))
    }
}

/// Trimmed value of an optional field; blank counts as absent.
pub fn optional(value: Option<&str>) -> Option<&str> {
    present(value)
}

/// A required field in a partial update: it may be left out, but when
/// supplied it must not be blank.
pub fn reject_blank<'a>(
    field: &str,
    value: Option<&'a str>,
) -> Result<Option<&'a str>, CoreError> {
    match value {
        None => Ok(None),
        Some(_) => require(field, value).map(Some),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
