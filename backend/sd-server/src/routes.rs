use crate::{AppState, create_save_date, get_save_date, health, list_save_dates};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Save-date resource
        .route("/save-date/", get(list_save_dates).post(create_save_date))
        .route("/save-date", get(list_save_dates).post(create_save_date))
        .route("/save-date/{id}", get(get_save_date))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        // CORS middleware (the browser frontend is served from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
