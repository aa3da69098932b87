//! reqwest-backed page fetcher.

use super::service::{FetchError, PageFetcher};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// User agent of a desktop Chrome build. Some sites refuse non-browser agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetches pages with a plain GET using a shared connection pool.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// Builds the underlying client with the given user agent and per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the client cannot be constructed.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        debug!(%url, bytes = body.len(), "Fetched page");
        Ok(body)
    }
}
