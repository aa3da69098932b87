//! Translator trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while calling a translation provider.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Translation request failed: {0}")]
    Network(String),

    #[error("Translation request timed out")]
    Timeout,

    #[error("Translation provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Invalid translation response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for TranslationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Result type for translation operations.
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Text translation capability.
///
/// One implementation is chosen at startup and injected into the services;
/// it is shared across all requests and must not hold per-request state.
///
/// # Implementations
///
/// - [`crate::infrastructure::translator::MockTranslator`] - Deterministic output, no network
/// - [`crate::infrastructure::translator::AzureTranslator`] - Azure Translator Text v3
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target_language`.
    ///
    /// When `source_language` is `None` the provider detects the source
    /// language itself.
    ///
    /// # Errors
    ///
    /// Returns a [`TranslationError`] when the provider cannot be reached,
    /// rejects the request, or times out. A successful response without any
    /// translation is not an error.
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> TranslationResult<String>;

    /// Short human-readable description of the backend, used for health reporting.
    fn describe(&self) -> String;
}
