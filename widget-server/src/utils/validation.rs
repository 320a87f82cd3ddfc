//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - Reasonable UX limits for names and subtitles inside a 350px popup
//! - SQLite TEXT has no built-in length enforcement

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Contact names and subtitles
pub const MAX_NAME_LEN: usize = 200;

/// Short texts: phone numbers, displayed hours, color values
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate an optional `HH:MM` wall-clock time string.
pub fn validate_optional_hhmm(value: &Option<String>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value
        && chrono::NaiveTime::parse_from_str(v, "%H:%M").is_err()
    {
        return Err(AppError::validation(format!(
            "{field} must be a HH:MM time"
        )));
    }
    Ok(())
}
