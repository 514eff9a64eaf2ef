//! Employee Model

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Column widths of the `employees` table
pub const MAX_EMPLOYEE_ID_LEN: u64 = 80;
pub const MAX_NAME_LEN: u64 = 100;
pub const MAX_ROLE_LEN: u64 = 50;
pub const MAX_EMAIL_LEN: u64 = 120;

/// Stored employee record
///
/// `id`, `created_at` and `updated_at` are assigned by the server and only
/// ever appear on output. Timestamps are UTC epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload (every field required)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EmployeeCreate {
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_EMPLOYEE_ID_LEN, message = "must be at most 80 characters")
    )]
    pub employee_id: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_NAME_LEN, message = "must be at most 100 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_ROLE_LEN, message = "must be at most 50 characters")
    )]
    pub role: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_EMAIL_LEN, message = "must be at most 120 characters")
    )]
    pub email: String,
}

/// Update employee payload (absent fields are left unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EmployeeUpdate {
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_EMPLOYEE_ID_LEN, message = "must be at most 80 characters")
    )]
    pub employee_id: Option<String>,
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_NAME_LEN, message = "must be at most 100 characters")
    )]
    pub name: Option<String>,
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_ROLE_LEN, message = "must be at most 50 characters")
    )]
    pub role: Option<String>,
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_EMAIL_LEN, message = "must be at most 120 characters")
    )]
    pub email: Option<String>,
}

impl EmployeeUpdate {
    /// True when the payload carries no field at all
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none()
            && self.name.is_none()
            && self.role.is_none()
            && self.email.is_none()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be empty".into()));
    }
    Ok(())
}
