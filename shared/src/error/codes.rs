//! Error codes returned in the `code` field of every JSON error body
//!
//! - 0xxx: request errors
//! - 8xxx: employee errors
//! - 9xxx: server errors

use serde::Serialize;
use std::fmt;

/// Error codes the employee service produces
///
/// Serialized as the bare number so clients can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    /// Well-formed JSON that breaks a field rule or the payload schema
    ValidationFailed = 2,
    /// Body is not JSON, or not declared as JSON
    InvalidFormat = 6,

    /// No employee carries the requested `employee_id`
    EmployeeNotFound = 8001,
    /// `employee_id` or `email` already belongs to another employee
    EmployeeExists = 8002,

    /// A query or write failed
    DatabaseError = 9002,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default client-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Malformed request body",
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeExists => "An employee with that ID or email already exists.",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
