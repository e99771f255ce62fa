//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by the
//! directory and the request store.

use super::AppError;
use shared::ErrorCode;

// ── Text length limits ──────────────────────────────────────────────

/// Display names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Enrollment numbers, departments
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Ticket descriptions
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Locations, staff remarks
pub const MAX_NOTE_LEN: usize = 500;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Avatar URLs
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    check_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate a required email: non-empty, bounded, and shaped like `local@domain`.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("Invalid email address: {}", trimmed),
        )
        .with_detail("field", "email")),
    }
}

/// Trim an optional string, collapsing blank values to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({len} chars, max {max_len})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}
