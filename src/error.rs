//! Application error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::application::services::ArticleError;
use crate::infrastructure::translator::TranslationError;

/// Body of every non-2xx API response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorInfo,
}

/// Error payload returned to API clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorInfo {
    /// `validation_error`, `upstream_error` or `internal_error`.
    #[schema(value_type = String, example = "validation_error")]
    pub code: &'static str,
    pub message: String,
    #[schema(value_type = Object)]
    pub details: Value,
}

/// Errors surfaced by HTTP handlers.
///
/// Each variant maps to a single status code:
///
/// - [`AppError::Validation`] - `400 Bad Request`, raised before any outbound call
/// - [`AppError::Upstream`] - `502 Bad Gateway`, the translation provider failed
/// - [`AppError::Internal`] - `500 Internal Server Error`
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Upstream { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Builds a validation error carrying the per-field failures from `validator`.
    pub fn invalid_request(message: impl Into<String>, errors: &ValidationErrors) -> Self {
        let details = serde_json::to_value(errors).unwrap_or_default();
        Self::bad_request(message, json!({ "fields": details }))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Upstream { message, details } => ("upstream_error", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. } => write!(f, "validation error: {}", message),
            AppError::Upstream { message, .. } => write!(f, "upstream error: {}", message),
            AppError::Internal { message, .. } => write!(f, "internal error: {}", message),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<TranslationError> for AppError {
    fn from(e: TranslationError) -> Self {
        match &e {
            TranslationError::Provider { status, .. } => AppError::upstream(
                "Translation provider error",
                json!({ "status": status, "reason": e.to_string() }),
            ),
            _ => AppError::upstream(
                "Translation provider unavailable",
                json!({ "reason": e.to_string() }),
            ),
        }
    }
}

impl From<ArticleError> for AppError {
    fn from(e: ArticleError) -> Self {
        match e {
            ArticleError::Translation(inner) => inner.into(),
            ArticleError::Conversion(e) => AppError::internal(
                "Failed to convert article content",
                json!({ "reason": e.to_string() }),
            ),
        }
    }
}
