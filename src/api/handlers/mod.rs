//! HTTP request handlers for API endpoints.

pub mod health;
pub mod translate;
pub mod translate_article;

pub use health::health_handler;
pub use translate::translate_handler;
pub use translate_article::translate_article_handler;
