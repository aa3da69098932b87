//! DTOs for the text translation endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to translate a piece of text.
///
/// Missing fields deserialize as empty and are rejected by validation.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "Hello, world")]
    pub text: String,

    /// Language code of the output, e.g. `"fr"`.
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    #[schema(example = "fr")]
    pub target_language: String,

    /// Language code of the input. Omitted means auto-detect.
    #[serde(default)]
    pub source_language: Option<String>,
}

/// Translated text.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub translated_text: String,
}
