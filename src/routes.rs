//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                              - Health check
//! - `GET  /openapi/v1.json`                     - OpenAPI document
//! - `POST /api/translation/translate`           - Translate text
//! - `POST /api/translation/translate-article`   - Translate a web article
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::api::openapi::ApiDoc;
use crate::state::AppState;
use axum::routing::get;
use axum::{Json, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use utoipa::OpenApi;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/openapi/v1.json", get(openapi_handler))
        .nest("/api", api::routes::translation_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
