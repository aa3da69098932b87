//! Core domain entities.
//!
//! Entities are plain values built for a single request and dropped with it.
//!
//! - [`ExtractedArticle`] - Title and body located in a fetched page
//! - [`ArticleSummary`] - Original and translated title/body plus the source link

pub mod article;

pub use article::{
    ArticleSummary, CONTENT_NOT_FOUND, ExtractedArticle, FALLBACK_CONTENT, FALLBACK_TITLE,
    TITLE_NOT_FOUND,
};
