//! Route table.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/scientists",
            get(handlers::list_scientists).post(handlers::create_scientist),
        )
        .route("/scientists/:id", get(handlers::get_scientist))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
