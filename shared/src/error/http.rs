//! HTTP status for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// A duplicate `employee_id`/`email` is bad input (400), not 409.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed | Self::InvalidFormat | Self::EmployeeExists => {
                StatusCode::BAD_REQUEST
            }
            Self::EmployeeNotFound => StatusCode::NOT_FOUND,
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
