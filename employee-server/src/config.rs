//! Server configuration

use thiserror::Error;

/// Title shown on the home page
pub const API_TITLE: &str = "Employee Management API";
/// Version shown on the home page
pub const API_VERSION: &str = "v1";

/// Configuration errors that stop the server from starting
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_PREFIX must start with '/' and name a path segment, got {0:?}")]
    InvalidApiPrefix(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection URL handed to the sqlx `Any` driver
    pub database_url: String,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
    /// HTTP listen port
    pub http_port: u16,
    /// Mount point of the JSON API (e.g. `/api`)
    pub api_prefix: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// `DATABASE_URL` wins when set; otherwise the MySQL URL is assembled from
    /// `MYSQL_HOST`, `MYSQL_PORT`, `MYSQL_USER`, `MYSQL_PASSWORD` and `MYSQL_DB`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let database_url = match lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            Some(url) => url,
            None => format!(
                "mysql://{}:{}@{}:{}/{}",
                var("MYSQL_USER", "root"),
                var("MYSQL_PASSWORD", "rootpassword"),
                var("MYSQL_HOST", "localhost"),
                var("MYSQL_PORT", "3306"),
                var("MYSQL_DB", "employees_db"),
            ),
        };

        Ok(Self {
            database_url,
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            api_prefix: normalize_prefix(&var("API_PREFIX", "/api"))?,
        })
    }
}

/// Strip trailing slashes. The root cannot host the API: the HTML list page
/// already owns `/employee`.
fn normalize_prefix(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !trimmed.starts_with('/') || trimmed.len() < 2 {
        return Err(ConfigError::InvalidApiPrefix(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
