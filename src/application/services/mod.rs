//! Business logic services for the application layer.

pub mod article_service;
pub mod translation_service;

pub use article_service::{ArticleError, ArticleService};
pub use translation_service::TranslationService;
