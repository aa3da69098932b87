//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ArticleService, TranslationService};

/// Read-only handles shared by every request.
///
/// Cloning is cheap; the services and their HTTP clients are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub translation_service: Arc<TranslationService>,
    pub article_service: Arc<ArticleService>,
}

impl AppState {
    pub fn new(
        translation_service: Arc<TranslationService>,
        article_service: Arc<ArticleService>,
    ) -> Self {
        Self {
            translation_service,
            article_service,
        }
    }
}
