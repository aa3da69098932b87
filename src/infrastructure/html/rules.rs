//! Selector-based title and body extraction.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::domain::entities::ExtractedArticle;

/// Title selector for dev.to article pages.
pub const DEFAULT_TITLE_SELECTOR: &str = r#"h1[class*="fs-2xl"]"#;

/// Body selector for dev.to article pages.
pub const DEFAULT_CONTENT_SELECTOR: &str = r#"div[class*="crayons-article__body"]"#;

#[derive(Debug, Error)]
#[error("Invalid {field} selector '{selector}': {reason}")]
pub struct SelectorError {
    pub field: &'static str,
    pub selector: String,
    pub reason: String,
}

/// Pair of CSS selectors locating an article's title and body.
///
/// Only the first element in document order is used for each selector.
#[derive(Debug, Clone)]
pub struct ExtractionRules {
    title: Selector,
    content: Selector,
}

impl ExtractionRules {
    /// Parses both selectors.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError`] naming the selector that failed to parse.
    pub fn new(title: &str, content: &str) -> Result<Self, SelectorError> {
        Ok(Self {
            title: parse_selector("title", title)?,
            content: parse_selector("content", content)?,
        })
    }

    /// Locates title and body in `html` and returns their trimmed visible text.
    ///
    /// Returns `None` unless both selectors match.
    pub fn extract(&self, html: &str) -> Option<ExtractedArticle> {
        let document = Html::parse_document(html);

        let title = document.select(&self.title).next()?;
        let content = document.select(&self.content).next()?;

        Some(ExtractedArticle {
            title: inner_text(title),
            content: inner_text(content),
        })
    }
}

fn parse_selector(field: &'static str, selector: &str) -> Result<Selector, SelectorError> {
    Selector::parse(selector).map_err(|e| SelectorError {
        field,
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Concatenated descendant text nodes, trimmed at both ends.
fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
