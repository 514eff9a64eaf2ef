//! HTTP routes
//!
//! | Path | Method | Handler |
//! |------|--------|---------|
//! | /health | GET | database check |
//! | / | GET | home page |
//! | /employee | GET | employee list page |
//! | {prefix}/employee | GET, POST | list / create |
//! | {prefix}/employee/{employee_id} | GET, PUT, DELETE | read / update / delete |

pub mod employee;
pub mod extract;
pub mod health;
pub mod pages;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON CRUD API, mounted under the configured prefix
fn employee_api() -> Router<AppState> {
    Router::new()
        .route("/employee", get(employee::list).post(employee::create))
        .route(
            "/employee/{employee_id}",
            get(employee::get_by_id)
                .put(employee::update)
                .delete(employee::delete),
        )
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let api_prefix = state.api_prefix.clone();

    Router::new()
        .route("/health", get(health::health_check))
        .route("/", get(pages::home))
        .route("/employee", get(pages::employee_list))
        .nest(&api_prefix, employee_api())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
