//! HTML processing for article extraction.
//!
//! - [`ExtractionRules`] - Configurable title/content selectors
//! - [`text_to_markdown`] / [`to_markdown`] - Markdown conversion of extracted text

mod markdown;
mod rules;

pub use markdown::{MarkdownError, text_to_markdown, to_markdown};
pub use rules::{DEFAULT_CONTENT_SELECTOR, DEFAULT_TITLE_SELECTOR, ExtractionRules, SelectorError};
