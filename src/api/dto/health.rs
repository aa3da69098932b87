//! Response body of `GET /health`.

use serde::Serialize;
use utoipa::ToSchema;

/// Liveness report with the translator backend selected at startup.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process can answer.
    pub status: String,
    /// Crate version from `Cargo.toml`.
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    /// Which translator serves requests. The provider itself is not contacted.
    pub translator: CheckStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckStatus {
    pub status: String,

    /// Backend description, e.g. `"Mock translator"` or `"Azure translator (westeurope)"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
