//! Shared types for the employee service
//!
//! Error types, response structures and the employee record shapes used by
//! the HTTP layer and the persistence layer.

pub mod error;
pub mod models;
pub mod util;
