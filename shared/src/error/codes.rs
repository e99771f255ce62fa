//! Unified error codes for the campus desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: User directory errors
//! - 4xxx: Service request errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the surrounding UI can
/// switch on them without parsing messages.
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
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// Invalid credentials (identifier/password)
    InvalidCredentials = 1002,
    /// Password does not meet the strength policy
    PasswordTooWeak = 1010,
    /// Password and confirmation differ
    PasswordMismatch = 1011,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Staff or admin role is required
    StaffRequired = 2002,
    /// Administrator role is required
    AdminRequired = 2003,
    /// Student role is required
    StudentRequired = 2004,

    // ==================== 3xxx: User ====================
    /// User not found
    UserNotFound = 3001,
    /// Email already registered
    EmailAlreadyRegistered = 3002,
    /// Enrollment number already registered
    EnrollmentAlreadyRegistered = 3003,

    // ==================== 4xxx: Request ====================
    /// Service request not found
    RequestNotFound = 4001,
    /// Unknown service type
    InvalidServiceType = 4002,
    /// Unknown request status
    InvalidStatus = 4003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
    /// Seed fixtures could not be loaded
    SeedLoadFailed = 9101,
    /// Seed fixtures contain a duplicated id
    DuplicateId = 9102,
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

    /// Whether this code reports an unknown record id
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::NotFound | ErrorCode::UserNotFound | ErrorCode::RequestNotFound
        )
    }

    /// Whether this code reports bad caller input
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorCode::ValidationFailed
                | ErrorCode::InvalidFormat
                | ErrorCode::RequiredField
                | ErrorCode::ValueOutOfRange
                | ErrorCode::PasswordTooWeak
                | ErrorCode::PasswordMismatch
                | ErrorCode::InvalidServiceType
                | ErrorCode::InvalidStatus
        )
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::InvalidCredentials => "Invalid identifier or password",
            ErrorCode::PasswordTooWeak => "Password does not meet the strength requirements",
            ErrorCode::PasswordMismatch => "Passwords do not match",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::StaffRequired => "Staff or administrator role is required",
            ErrorCode::AdminRequired => "Administrator role is required",
            ErrorCode::StudentRequired => "Student role is required",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::EmailAlreadyRegistered => "Email is already registered",
            ErrorCode::EnrollmentAlreadyRegistered => "Enrollment number is already registered",

            // Request
            ErrorCode::RequestNotFound => "Service request not found",
            ErrorCode::InvalidServiceType => "Unknown service type",
            ErrorCode::InvalidStatus => "Unknown request status",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::SeedLoadFailed => "Failed to load seed data",
            ErrorCode::DuplicateId => "Duplicate id in seed data",
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
            4 => Ok(ErrorCode::AlreadyExists),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1002 => Ok(ErrorCode::InvalidCredentials),
            1010 => Ok(ErrorCode::PasswordTooWeak),
            1011 => Ok(ErrorCode::PasswordMismatch),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::StaffRequired),
            2003 => Ok(ErrorCode::AdminRequired),
            2004 => Ok(ErrorCode::StudentRequired),

            // User
            3001 => Ok(ErrorCode::UserNotFound),
            3002 => Ok(ErrorCode::EmailAlreadyRegistered),
            3003 => Ok(ErrorCode::EnrollmentAlreadyRegistered),

            // Request
            4001 => Ok(ErrorCode::RequestNotFound),
            4002 => Ok(ErrorCode::InvalidServiceType),
            4003 => Ok(ErrorCode::InvalidStatus),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::SeedLoadFailed),
            9102 => Ok(ErrorCode::DuplicateId),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
