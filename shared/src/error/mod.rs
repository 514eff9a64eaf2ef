//! Error system for the employee service
//!
//! Every failed JSON request answers with the [`AppError`] body
//! `{"code": <u16>, "message": "...", "details": {...}?}`; the HTTP status
//! follows from the [`ErrorCode`].

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{ApiMessage, AppError};
