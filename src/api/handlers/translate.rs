//! Handler for the text translation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::translation::{TranslationRequest, TranslationResponse};
use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

/// Translates a piece of text.
///
/// # Endpoint
///
/// `POST /api/translation/translate`
///
/// # Request Body
///
/// ```json
/// {
///   "text": "Hello, world",
///   "targetLanguage": "fr",
///   "sourceLanguage": "en"   // optional, auto-detected when omitted
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "translatedText": "Bonjour, le monde" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `text` or `targetLanguage` is empty.
/// Returns 502 Bad Gateway if the translation provider fails.
#[utoipa::path(
    post,
    path = "/api/translation/translate",
    tag = "translation",
    request_body = TranslationRequest,
    responses(
        (status = 200, description = "Text translated", body = TranslationResponse),
        (status = 400, description = "Text or target language missing", body = ErrorResponse),
        (status = 502, description = "Translation provider failed", body = ErrorResponse),
    )
)]
pub async fn translate_handler(
    State(state): State<AppState>,
    Json(payload): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::invalid_request("Text and TargetLanguage are required.", &e))?;

    let translated_text = state
        .translation_service
        .translate(
            &payload.text,
            &payload.target_language,
            payload.source_language.as_deref(),
        )
        .await?;

    Ok(Json(TranslationResponse { translated_text }))
}
