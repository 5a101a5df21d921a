use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Request bodies above this are refused by the framework. Set above the
/// 5 MiB upload threshold so oversized images reach the engine's own
/// validation and get its descriptive rejection instead of a bare 413.
const BODY_LIMIT_BYTES: usize = 8 * 1024 * 1024;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/recipes", get(handlers::get_recipes))
        .route("/recipes/search", post(handlers::search_recipes))
        .route("/recipes/:id", get(handlers::get_recipe))
        .route("/ingredients", get(handlers::get_ingredients))
        // Image detection
        .route("/detect", post(handlers::detect_image))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
