//! OpenAPI document for the HTTP API.

use utoipa::OpenApi;

use crate::api::dto::article::{ArticleFetchRequest, ArticleSummaryResponse};
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::api::dto::translation::{TranslationRequest, TranslationResponse};
use crate::api::handlers::{health, translate, translate_article};
use crate::error::{ErrorInfo, ErrorResponse};

/// Served as JSON at `GET /openapi/v1.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Article Translator",
        description = "Translates text and dev.to articles through Azure Translator."
    ),
    paths(
        translate::translate_handler,
        translate_article::translate_article_handler,
        health::health_handler,
    ),
    components(schemas(
        TranslationRequest,
        TranslationResponse,
        ArticleFetchRequest,
        ArticleSummaryResponse,
        HealthResponse,
        HealthChecks,
        CheckStatus,
        ErrorResponse,
        ErrorInfo,
    )),
    tags(
        (name = "translation", description = "Text and article translation"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
