use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, mentions, middleware::metrics_middleware, numerals, resolve};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Resolution
        .route("/resolve", post(resolve::resolve))
        .route("/mentions", post(mentions::extract))
        // Numerals
        .route("/numerals/roman/{value}", get(numerals::roman))
        .route("/numerals/integer/{roman}", get(numerals::integer))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
