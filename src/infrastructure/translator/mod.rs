//! Translation backends.
//!
//! Provides a [`Translator`] trait with two implementations:
//! - [`AzureTranslator`] - Live Azure Translator calls
//! - [`MockTranslator`] - Deterministic output for testing and offline development
//!
//! The variant is chosen once at startup by [`build_translator`].

mod azure_translator;
mod mock_translator;
mod service;

pub use azure_translator::{AzureSettings, AzureTranslator, TRANSLATION_NOT_AVAILABLE};
pub use mock_translator::MockTranslator;
pub use service::{TranslationError, TranslationResult, Translator};

use std::sync::Arc;

/// Selects the translator variant for the lifetime of the process.
///
/// `None` settings select the mock.
///
/// # Errors
///
/// Returns an error if the live client cannot be constructed.
pub fn build_translator(settings: Option<AzureSettings>) -> TranslationResult<Arc<dyn Translator>> {
    match settings {
        Some(settings) => Ok(Arc::new(AzureTranslator::new(settings)?)),
        None => Ok(Arc::new(MockTranslator::new())),
    }
}
