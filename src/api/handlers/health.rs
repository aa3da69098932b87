//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service status and the active translator backend.
///
/// # Endpoint
///
/// `GET /health`
///
/// No outbound calls are made; the check reports configuration, not provider
/// reachability.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "translator": {
///       "status": "ok",
///       "message": "Azure translator (westeurope)"
///     }
///   }
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            translator: CheckStatus {
                status: "ok".to_string(),
                message: Some(state.translation_service.backend()),
            },
        },
    })
}
