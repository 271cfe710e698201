pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Interview API
        .route("/interview", post(handlers::handle_generate_from_text))
        .route("/interview/upload", post(handlers::handle_upload))
        .route(
            "/interview/generate-type",
            post(handlers::handle_generate_by_type),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
