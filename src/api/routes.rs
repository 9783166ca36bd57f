//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    analyze, create_brand, generate_calendar, generate_carousel, generate_caption,
    generate_hashtags, generate_single, health, industries, list_brands, ready, render_metrics,
    service_info, status, AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        // Health endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(render_metrics))
        // Status and discovery
        .route("/api/v1/status", get(status))
        .route("/api/v1/industries", get(industries))
        // Brand registry
        .route("/api/v1/brands", get(list_brands).post(create_brand))
        // Generation endpoints
        .route("/api/v1/generate/carousel", post(generate_carousel))
        .route("/api/v1/generate/caption", post(generate_caption))
        .route("/api/v1/generate/hashtags", post(generate_hashtags))
        .route("/api/v1/generate/calendar", post(generate_calendar))
        .route("/api/v1/generate/single", post(generate_single))
        .route("/api/v1/analyze", post(analyze))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
