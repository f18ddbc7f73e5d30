use crate::{AppState, api, health};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.upload.max_bytes;

    Router::new()
        // Spreadsheet endpoints
        .route(
            "/upload",
            post(api::users::upload::upload_users).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/download-users-excel",
            get(api::users::download::download_users),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
