//! # Article Translator
//!
//! An HTTP service that translates text and web articles, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Request-scoped entities and sentinel values
//! - **Application Layer** ([`application`]) - Translation dispatch and the article pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - Translator backends, page fetching, HTML processing
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Azure Translator backend, or a deterministic mock for offline use
//! - Article extraction with configurable CSS selectors
//! - Article body conversion to Markdown before translation
//! - Fetch failures degrade to a sample article instead of an error
//!
//! ## Quick Start
//!
//! ```bash
//! export TRANSLATOR_USE_MOCK=true
//! cargo run
//!
//! curl -X POST localhost:3000/api/translation/translate \
//!   -H 'content-type: application/json' \
//!   -d '{"text": "Hello", "targetLanguage": "fr"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ArticleService, TranslationService};
    pub use crate::domain::entities::ArticleSummary;
    pub use crate::error::AppError;
    pub use crate::infrastructure::translator::{MockTranslator, Translator};
    pub use crate::state::AppState;
}
