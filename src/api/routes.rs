//! API Routes
//!
//! Configures the Axum router with the cache administration endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cleanup_handler, clear_handler, contains_handler, health_handler, invalidate_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check endpoint
/// - `GET /cache/stats` - Cache statistics
/// - `POST /cache/contains` - Check for a live chart
/// - `POST /cache/invalidate` - Drop one chart
/// - `POST /cache/cleanup` - Run an expiry sweep now
/// - `DELETE /cache` - Drop every chart
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/cache", delete(clear_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache/contains", post(contains_handler))
        .route("/cache/invalidate", post(invalidate_handler))
        .route("/cache/cleanup", post(cleanup_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
