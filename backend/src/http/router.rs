//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Prefix under which the data endpoints are served.
pub const API_PREFIX: &str = "/api";

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/restaurants", get(handlers::list_restaurants))
        .route("/restaurants/{id}", get(handlers::get_restaurant))
        .route(
            "/restaurants/{id}/analytics",
            get(handlers::get_restaurant_analytics),
        )
        .route("/top-restaurants", get(handlers::get_top_restaurants))
        .route("/search/restaurants", get(handlers::search_restaurants))
        .route("/filter/orders", get(handlers::filter_orders));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest(API_PREFIX, api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
