//! Outbound page retrieval for article translation.

mod http_fetcher;
mod service;

pub use http_fetcher::{BROWSER_USER_AGENT, HttpPageFetcher};
pub use service::{FetchError, PageFetcher};

#[cfg(test)]
pub use service::MockPageFetcher;
