mod common;

use article_translator::api::handlers::translate_article_handler;
use article_translator::infrastructure::html::text_to_markdown;
use article_translator::infrastructure::translator::{
    TranslationError, TranslationResult, Translator,
};
use async_trait::async_trait;
use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

const ENDPOINT: &str = "/api/translation/translate-article";

fn create_server(state: article_translator::AppState) -> TestServer {
    let app = Router::new()
        .route(ENDPOINT, post(translate_article_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

struct TimeoutTranslator;

#[async_trait]
impl Translator for TimeoutTranslator {
    async fn translate(&self, _: &str, _: &str, _: Option<&str>) -> TranslationResult<String> {
        Err(TranslationError::Timeout)
    }

    fn describe(&self) -> String {
        "timeout".to_string()
    }
}

#[tokio::test]
async fn test_article_extracted_and_translated() {
    let site = common::spawn_fixture_site().await;
    let url = format!("http://{}/article", site);
    let server = create_server(common::create_test_state());

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": url, "targetLanguage": "es" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let expected_summary = text_to_markdown(common::ARTICLE_BODY).unwrap();

    assert_eq!(json["originalTitle"], common::ARTICLE_TITLE);
    assert_eq!(
        json["translatedTitle"],
        format!("Translated to es: {}", common::ARTICLE_TITLE)
    );
    assert_eq!(json["originalSummary"], expected_summary);
    assert_eq!(
        json["translatedSummary"],
        format!("Translated to es: {}", expected_summary)
    );
    assert_eq!(json["link"], url);
}

#[tokio::test]
async fn test_article_sent_with_browser_user_agent() {
    let site = common::spawn_fixture_site().await;
    let url = format!("http://{}/browser-only", site);
    let server = create_server(common::create_test_state());

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": url, "targetLanguage": "es" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalTitle"], common::ARTICLE_TITLE);
}

#[tokio::test]
async fn test_article_selectors_miss() {
    let site = common::spawn_fixture_site().await;
    let url = format!("http://{}/unrelated", site);
    let server = create_server(common::create_test_state());

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": url, "targetLanguage": "pt" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalTitle"], "Title not found");
    assert_eq!(json["translatedTitle"], "Translated to pt: Title not found");
    assert_eq!(json["originalSummary"], "Content not found");
    assert_eq!(json["translatedSummary"], "Translated to pt: Content not found");
    assert_eq!(json["link"], url);
}

#[tokio::test]
async fn test_article_connection_refused_falls_back() {
    let url = common::refused_url().await;
    let server = create_server(common::create_test_state());

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": url, "targetLanguage": "fr" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalTitle"], "Sample Article Title");
    assert_eq!(json["translatedTitle"], "Translated to fr: Sample Article Title");
    assert_eq!(
        json["originalSummary"],
        "This is a sample article content because the site blocked or the URL was not found."
    );
    assert_eq!(
        json["translatedSummary"],
        "Translated to fr: This is a sample article content because the site blocked or the URL was not found."
    );
    assert_eq!(json["link"], url);
}

#[tokio::test]
async fn test_article_not_found_falls_back() {
    let site = common::spawn_fixture_site().await;
    let url = format!("http://{}/no-such-article", site);
    let server = create_server(common::create_test_state());

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": url, "targetLanguage": "fr" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalTitle"], "Sample Article Title");
    assert_eq!(json["link"], url);
}

#[tokio::test]
async fn test_article_forbidden_falls_back() {
    let site = common::spawn_fixture_site().await;
    let url = format!("http://{}/forbidden", site);
    let server = create_server(common::create_test_state());

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": url, "targetLanguage": "fr" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalTitle"], "Sample Article Title");
}

#[tokio::test]
async fn test_article_translation_failure_not_masked() {
    let url = common::refused_url().await;
    let server = create_server(common::create_test_state_with(Arc::new(TimeoutTranslator)));

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": url, "targetLanguage": "fr" }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "upstream_error");
}

#[tokio::test]
async fn test_article_empty_url_rejected() {
    let server = create_server(common::create_test_state());

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": "", "targetLanguage": "fr" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Url and TargetLanguage are required.");
}

#[tokio::test]
async fn test_article_empty_target_rejected() {
    let server = create_server(common::create_test_state());

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": "https://dev.to/a/b", "targetLanguage": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Url and TargetLanguage are required.");
}

#[tokio::test]
async fn test_article_malformed_url_rejected() {
    let server = create_server(common::create_test_state());

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": "not a url", "targetLanguage": "fr" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Url must be a valid URL.");
}

#[tokio::test]
async fn test_article_non_http_scheme_rejected() {
    let server = create_server(common::create_test_state());

    for url in ["ftp://example.com/article", "mailto:someone@example.com"] {
        let response = server
            .post(ENDPOINT)
            .json(&json!({ "url": url, "targetLanguage": "fr" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(json["error"]["message"], "Url must be a valid URL.");
    }
}

#[tokio::test]
async fn test_article_generic_types_kept_in_body() {
    let site = common::spawn_fixture_site().await;
    let url = format!("http://{}/generics", site);
    let server = create_server(common::create_test_state());

    let response = server
        .post(ENDPOINT)
        .json(&json!({ "url": url, "targetLanguage": "de" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let summary = json["originalSummary"].as_str().unwrap().replace('\\', "");

    assert_eq!(json["originalTitle"], "Choosing between Vec<T> and &[T]");
    assert_eq!(summary, "Return Vec<String> when the caller owns the result.");
}
