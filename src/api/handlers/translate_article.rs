//! Handler for the article translation endpoint.

use axum::{Json, extract::State};
use validator::{Validate, ValidationErrors};

use crate::api::dto::article::{ArticleFetchRequest, ArticleSummaryResponse};
use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

/// Fetches a web article and returns its title and body with translations.
///
/// # Endpoint
///
/// `POST /api/translation/translate-article`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://dev.to/someone/some-article",
///   "targetLanguage": "es"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "originalTitle": "Some article",
///   "translatedTitle": "Algún artículo",
///   "originalSummary": "Body text...",
///   "translatedSummary": "Texto del cuerpo...",
///   "link": "https://dev.to/someone/some-article"
/// }
/// ```
///
/// A page that cannot be fetched still yields 200 with a sample article.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` or `targetLanguage` is empty, or `url` is not a URL.
/// Returns 502 Bad Gateway if the translation provider fails.
#[utoipa::path(
    post,
    path = "/api/translation/translate-article",
    tag = "translation",
    request_body = ArticleFetchRequest,
    responses(
        (status = 200, description = "Article extracted and translated", body = ArticleSummaryResponse),
        (status = 400, description = "Missing field or URL is not http(s)", body = ErrorResponse),
        (status = 500, description = "Article body could not be converted", body = ErrorResponse),
        (status = 502, description = "Translation provider failed", body = ErrorResponse),
    )
)]
pub async fn translate_article_handler(
    State(state): State<AppState>,
    Json(payload): Json<ArticleFetchRequest>,
) -> Result<Json<ArticleSummaryResponse>, AppError> {
    payload.validate().map_err(|e| rejection(&e))?;

    let summary = state
        .article_service
        .translate_article(&payload.url, &payload.target_language)
        .await?;

    Ok(Json(summary.into()))
}

/// Missing fields take precedence over a malformed URL in the message.
fn rejection(errors: &ValidationErrors) -> AppError {
    let missing = errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .any(|e| e.code == "required");

    if missing {
        AppError::invalid_request("Url and TargetLanguage are required.", errors)
    } else {
        AppError::invalid_request("Url must be a valid URL.", errors)
    }
}
