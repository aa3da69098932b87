#![allow(dead_code)]

use article_translator::application::services::{ArticleService, TranslationService};
use article_translator::infrastructure::fetcher::{BROWSER_USER_AGENT, HttpPageFetcher};
use article_translator::infrastructure::html::{
    DEFAULT_CONTENT_SELECTOR, DEFAULT_TITLE_SELECTOR, ExtractionRules,
};
use article_translator::infrastructure::translator::{MockTranslator, Translator};
use article_translator::state::AppState;
use axum::{
    Router,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub const ARTICLE_TITLE: &str = "Understanding Ownership in Rust";
pub const ARTICLE_BODY: &str = "Every value has a single owner.";

pub const ARTICLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Understanding Ownership in Rust - DEV Community</title></head>
  <body>
    <header><h1 class="site-logo">DEV</h1></header>
    <main>
      <h1 class="fs-3xl m:fs-4xl l:fs-2xl fw-bold s:fw-heavy lh-tight mb-2">
        Understanding Ownership in Rust
      </h1>
      <div class="crayons-article__body text-styles spec__body" data-article-id="42" id="article-body">
        <p>Every value has a single owner.</p>
      </div>
    </main>
  </body>
</html>"#;

pub const UNRELATED_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <h1>Some other site</h1>
    <article><p>Different markup entirely.</p></article>
  </body>
</html>"#;

pub const GENERICS_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <h1 class="fs-2xl">Choosing between Vec&lt;T&gt; and &amp;[T]</h1>
    <div class="crayons-article__body">
      <p>Return <code>Vec&lt;String&gt;</code> when the caller owns the result.</p>
    </div>
  </body>
</html>"#;

/// State with the mock translator and a real HTTP fetcher.
pub fn create_test_state() -> AppState {
    create_test_state_with(Arc::new(MockTranslator::new()))
}

pub fn create_test_state_with(translator: Arc<dyn Translator>) -> AppState {
    let fetcher = HttpPageFetcher::new(BROWSER_USER_AGENT, Duration::from_secs(5)).unwrap();
    let rules = ExtractionRules::new(DEFAULT_TITLE_SELECTOR, DEFAULT_CONTENT_SELECTOR).unwrap();

    let translation_service = Arc::new(TranslationService::new(translator));
    let article_service = Arc::new(ArticleService::new(
        Arc::new(fetcher),
        translation_service.clone(),
        rules,
    ));

    AppState::new(translation_service, article_service)
}

async fn user_agent_gate(headers: HeaderMap) -> Result<&'static str, StatusCode> {
    let agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if agent.starts_with("Mozilla/5.0") {
        Ok(ARTICLE_PAGE)
    } else {
        Err(StatusCode::FORBIDDEN)
    }
}

/// Serves fixture pages on an ephemeral local port.
///
/// - `/article`   - page matching the default extraction rules
/// - `/unrelated` - page matching neither rule
/// - `/generics`  - article whose text contains `<`, `>` and `&`
/// - `/browser-only` - article page, 403 unless the user agent looks like a browser
/// - `/forbidden` - 403
/// - anything else - 404
pub async fn spawn_fixture_site() -> SocketAddr {
    let app = Router::new()
        .route("/article", get(|| async { ARTICLE_PAGE }))
        .route("/unrelated", get(|| async { UNRELATED_PAGE }))
        .route("/generics", get(|| async { GENERICS_PAGE }))
        .route("/browser-only", get(user_agent_gate))
        .route("/forbidden", get(|| async { StatusCode::FORBIDDEN }));

    spawn(app).await
}

pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// A URL on a local port that nothing listens on.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}/article", addr)
}
