//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`translator`] - Translation backends (Azure and mock implementations)
//! - [`fetcher`] - Outbound page retrieval
//! - [`html`] - Selector extraction and Markdown conversion

pub mod fetcher;
pub mod html;
pub mod translator;
