use crate::{AppState, api, health};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Landing page
        .route("/", get(api::welcome::welcome))
        // Admission
        .route("/join", get(api::masons::masons::join))
        // Protected roster listing
        .route("/roster", get(api::masons::masons::roster))
        // Health check
        .route("/health", get(health::health))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
