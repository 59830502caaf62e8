//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    evict_all_handler, evict_handler, get_all_handler, get_handler, health_handler, put_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/lru` - Store or replace an entry
/// - `GET /api/lru/:key` - Look up a single entry
/// - `GET /api/lru` - Dump all live entries
/// - `DELETE /api/lru/:key` - Remove a single entry
/// - `DELETE /api/lru` - Remove every entry
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/api/lru",
            post(put_handler)
                .get(get_all_handler)
                .delete(evict_all_handler),
        )
        .route("/api/lru/:key", get(get_handler).delete(evict_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
