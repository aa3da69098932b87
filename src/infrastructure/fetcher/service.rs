//! Page fetcher trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Transport-level failures while retrieving a page.
///
/// Every variant is treated the same way by the article pipeline: the request
/// degrades to the fallback summary instead of failing.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else if e.is_body() || e.is_decode() {
            Self::Body(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Retrieves raw HTML for a URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the page body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on connection, DNS, timeout or non-2xx responses.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
