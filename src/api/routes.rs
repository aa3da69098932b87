//! API route configuration.

use crate::api::handlers::{translate_article_handler, translate_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Translation routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /translation/translate`         - Translate text
/// - `POST /translation/translate-article` - Fetch, extract and translate an article
pub fn translation_routes() -> Router<AppState> {
    Router::new()
        .route("/translation/translate", post(translate_handler))
        .route(
            "/translation/translate-article",
            post(translate_article_handler),
        )
}
