//! Application layer services implementing the request flows.
//!
//! Services consume the translator and fetcher abstractions from
//! [`crate::infrastructure`] and expose a small API to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::translation_service::TranslationService`] - Text translation dispatch
//! - [`services::article_service::ArticleService`] - Article fetch, extraction and translation

pub mod services;
