//! employee-server: employee directory web service
//!
//! - JSON CRUD API for employee records (`{prefix}/employee`)
//! - HTML home page and employee list page
//! - Liveness check backed by a database query

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use api::create_router;
pub use config::Config;
pub use state::AppState;
