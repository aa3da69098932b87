//! Deterministic translator for offline development and tests.

use super::service::{TranslationResult, Translator};
use async_trait::async_trait;
use tracing::debug;

/// A translator that never leaves the process.
///
/// Produces `"Translated to {target}: {text}"` for every input, including
/// empty text. The source language is ignored.
pub struct MockTranslator;

impl MockTranslator {
    /// Creates a new MockTranslator instance.
    pub fn new() -> Self {
        debug!("Using MockTranslator (no provider calls)");
        Self
    }
}

impl Default for MockTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        _source_language: Option<&str>,
    ) -> TranslationResult<String> {
        Ok(format!("Translated to {}: {}", target_language, text))
    }

    fn describe(&self) -> String {
        "Mock translator".to_string()
    }
}
