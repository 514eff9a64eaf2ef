//! Health check endpoint

use axum::extract::State;
use axum::http::StatusCode;

use crate::db;
use crate::state::AppState;

/// GET /health - `200 OK` once the database answers a trivial query
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, String) {
    match db::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "OK".to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {e}"))
        }
    }
}
