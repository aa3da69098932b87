//! Access logging for the translation API.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Wraps every route in a `request` span carrying method and path.
///
/// Spans opened inside handlers, such as the article pipeline's
/// `translate_article{url=.. target_language=..}`, nest under it, so one
/// request's fetch warnings and provider errors share a parent. Each response
/// is logged once with its status and latency in milliseconds; 5xx responses
/// are logged as failures. Bodies are never recorded, so text submitted for
/// translation stays out of the logs.
///
/// ```text
/// WARN request{method=POST uri=/api/translation/translate-article version=HTTP/1.1}:translate_article{url=https://dev.to/a/b target_language=es}: Article fetch failed, using sample article
/// INFO request{method=POST uri=/api/translation/translate-article version=HTTP/1.1}: finished processing request latency=41 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
