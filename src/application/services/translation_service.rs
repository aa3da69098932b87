//! Translation dispatch service.

use std::sync::Arc;

use crate::infrastructure::translator::{TranslationResult, Translator};

/// Dispatches translation requests to the translator selected at startup.
///
/// The backend is fixed for the lifetime of the service; there is no
/// per-request switching between mock and live providers.
pub struct TranslationService {
    translator: Arc<dyn Translator>,
}

impl TranslationService {
    /// Creates a new translation service.
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Translates `text` into `target_language`.
    ///
    /// An absent or empty `source_language` asks the provider to detect it.
    ///
    /// # Errors
    ///
    /// Propagates provider failures unchanged; callers decide how to surface them.
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> TranslationResult<String> {
        let source_language = source_language.filter(|s| !s.is_empty());

        self.translator
            .translate(text, target_language, source_language)
            .await
    }

    /// Describes the active backend.
    pub fn backend(&self) -> String {
        self.translator.describe()
    }
}
