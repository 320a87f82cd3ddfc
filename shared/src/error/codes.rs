//! Unified error codes for the widget backend
//!
//! This module defines all error codes used across the server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Session errors
//! - 5xxx: Plan errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Required request parameter missing
    MissingParameter = 4,
    /// Unrecognized admin form intent
    InvalidIntent = 5,
    /// Invalid request
    InvalidRequest = 6,

    // ==================== 1xxx: Session ====================
    /// Request carries no session token
    NotAuthenticated = 1001,
    /// Session token is invalid
    TokenInvalid = 1002,
    /// Session token has expired
    TokenExpired = 1003,
    /// Token destination is not an allowed shop domain
    InvalidShopDomain = 1004,

    // ==================== 5xxx: Plan ====================
    /// Subscription plan limit reached
    PlanLimitExceeded = 5001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::MissingParameter => "Required parameter missing",
            ErrorCode::InvalidIntent => "Invalid intent",
            ErrorCode::InvalidRequest => "Invalid request",

            // Session
            ErrorCode::NotAuthenticated => "Session token required",
            ErrorCode::TokenInvalid => "Session token is invalid",
            ErrorCode::TokenExpired => "Session token has expired",
            ErrorCode::InvalidShopDomain => "Shop domain is not allowed",

            // Plan
            ErrorCode::PlanLimitExceeded => "Plan limit exceeded",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::MissingParameter),
            5 => Ok(ErrorCode::InvalidIntent),
            6 => Ok(ErrorCode::InvalidRequest),

            // Session
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::TokenInvalid),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::InvalidShopDomain),

            // Plan
            5001 => Ok(ErrorCode::PlanLimitExceeded),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
