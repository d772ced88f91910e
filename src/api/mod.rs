pub mod handlers;
pub mod models;
pub mod openapi;

use crate::config::ALLOWED_ORIGINS;
use crate::core::services::NotesService;
use crate::infrastructure::storage::sqlite::SqliteStorage;
use axum::{Json, Router, routing::get};
use http::HeaderValue;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub type AppState = Arc<NotesService<SqliteStorage>>;

/// Full application: API routes, health check, OpenAPI document and the
/// middleware stack.
pub fn build_app(service: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/openapi.json", get(|| async { Json(openapi::ApiDoc::openapi()) }))
        .merge(handlers::api_routes(service))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

// Credentials rule out wildcards, so methods and headers mirror the preflight.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(ALLOWED_ORIGINS.into_iter().map(HeaderValue::from_static)))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
