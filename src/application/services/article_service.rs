//! Article acquisition and translation pipeline.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::application::services::TranslationService;
use crate::domain::entities::{ArticleSummary, ExtractedArticle};
use crate::infrastructure::fetcher::PageFetcher;
use crate::infrastructure::html::{ExtractionRules, MarkdownError, text_to_markdown};
use crate::infrastructure::translator::TranslationError;

/// Failures of the article pipeline that reach the caller.
///
/// Fetch failures are deliberately absent: they never escape the pipeline.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Conversion(#[from] MarkdownError),
}

/// Fetches a page, extracts its title and body, and translates both.
///
/// # Outcomes
///
/// - Page fetched, both selectors match: extracted text, body converted to Markdown
/// - Page fetched, a selector misses: `"Title not found"` / `"Content not found"`
/// - Fetch fails (connection, DNS, timeout, non-2xx): fixed sample article
///
/// All three outcomes are translated and returned as a successful summary.
/// Translation failures are not masked and propagate as [`ArticleError::Translation`].
pub struct ArticleService {
    fetcher: Arc<dyn PageFetcher>,
    translation_service: Arc<TranslationService>,
    rules: ExtractionRules,
}

impl ArticleService {
    /// Creates a new article service.
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        translation_service: Arc<TranslationService>,
        rules: ExtractionRules,
    ) -> Self {
        Self {
            fetcher,
            translation_service,
            rules,
        }
    }

    /// Builds a translated summary for the article at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ArticleError::Translation`] if either translation call fails, and
    /// [`ArticleError::Conversion`] if the body cannot be converted to Markdown.
    #[instrument(level = "info", skip_all, fields(%url, %target_language))]
    pub async fn translate_article(
        &self,
        url: &str,
        target_language: &str,
    ) -> Result<ArticleSummary, ArticleError> {
        let article = match self.fetcher.fetch(url).await {
            Ok(html) => self.extract(&html)?,
            Err(e) => {
                warn!(error = %e, "Article fetch failed, using sample article");
                ExtractedArticle::fallback()
            }
        };

        self.summarize(article, url, target_language).await
    }

    /// Applies the extraction rules and converts the located body to Markdown.
    fn extract(&self, html: &str) -> Result<ExtractedArticle, ArticleError> {
        match self.rules.extract(html) {
            Some(found) => {
                let content = text_to_markdown(&found.content)?;
                info!(
                    title_chars = found.title.chars().count(),
                    content_chars = content.chars().count(),
                    "Extracted article"
                );
                Ok(ExtractedArticle {
                    title: found.title,
                    content,
                })
            }
            None => {
                info!("Extraction rules matched nothing");
                Ok(ExtractedArticle::not_found())
            }
        }
    }

    async fn summarize(
        &self,
        article: ExtractedArticle,
        url: &str,
        target_language: &str,
    ) -> Result<ArticleSummary, ArticleError> {
        let translated_title = self
            .translation_service
            .translate(&article.title, target_language, None)
            .await?;
        let translated_summary = self
            .translation_service
            .translate(&article.content, target_language, None)
            .await?;

        Ok(ArticleSummary {
            original_title: article.title,
            translated_title,
            original_summary: article.content,
            translated_summary,
            link: url.to_string(),
        })
    }
}
