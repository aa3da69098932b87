//! Article entities produced by the acquisition pipeline.

/// Title used when the page lacks a title element matching the extraction rules.
pub const TITLE_NOT_FOUND: &str = "Title not found";

/// Body used when the page lacks a content element matching the extraction rules.
pub const CONTENT_NOT_FOUND: &str = "Content not found";

/// Title substituted when the page could not be fetched.
pub const FALLBACK_TITLE: &str = "Sample Article Title";

/// Body substituted when the page could not be fetched.
pub const FALLBACK_CONTENT: &str =
    "This is a sample article content because the site blocked or the URL was not found.";

/// Title and body text located in a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: String,
    pub content: String,
}

impl ExtractedArticle {
    /// Sentinel pair for a page where extraction found nothing.
    pub fn not_found() -> Self {
        Self {
            title: TITLE_NOT_FOUND.to_string(),
            content: CONTENT_NOT_FOUND.to_string(),
        }
    }

    /// Sentinel pair for a page that could not be retrieved.
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            content: FALLBACK_CONTENT.to_string(),
        }
    }
}

/// An article together with its translation.
///
/// Every field is always populated; `translated_*` is the translation of the
/// matching `original_*` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub original_title: String,
    pub translated_title: String,
    pub original_summary: String,
    pub translated_summary: String,
    pub link: String,
}
