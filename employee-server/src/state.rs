//! Application state
//!
//! Built once at startup and handed to every handler through axum `State`.

use std::sync::Arc;

use sqlx::AnyPool;

use crate::config::Config;
use crate::db;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: AnyPool,
    /// Mount point of the JSON API
    pub api_prefix: Arc<str>,
}

impl AppState {
    /// Connect to the configured database and apply migrations
    pub async fn new(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = db::connect(&config.database_url, config.max_connections).await?;
        Ok(Self::with_pool(pool, &config.api_prefix))
    }

    /// Wrap an already-open pool
    pub fn with_pool(pool: AnyPool, api_prefix: &str) -> Self {
        Self {
            pool,
            api_prefix: Arc::from(api_prefix),
        }
    }
}
