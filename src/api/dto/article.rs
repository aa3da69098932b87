//! DTOs for the article translation endpoint.

use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domain::entities::ArticleSummary;

/// Request to fetch and translate a web article.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFetchRequest {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    #[validate(custom(function = "validate_http_url", code = "invalid_url"))]
    #[schema(example = "https://dev.to/someone/some-article")]
    pub url: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub target_language: String,
}

/// Accepts absolute `http` and `https` URLs only.
///
/// An empty value passes here and is reported by the `required` rule instead.
fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ValidationError::new("invalid_url")),
    }
}

/// Original and translated article fields.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryResponse {
    pub original_title: String,
    pub translated_title: String,
    pub original_summary: String,
    pub translated_summary: String,
    pub link: String,
}

impl From<ArticleSummary> for ArticleSummaryResponse {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            original_title: summary.original_title,
            translated_title: summary.translated_title,
            original_summary: summary.original_summary,
            translated_summary: summary.translated_summary,
            link: summary.link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> ArticleFetchRequest {
        ArticleFetchRequest {
            url: url.to_string(),
            target_language: "fr".to_string(),
        }
    }

    #[test]
    fn test_http_and_https_urls_accepted() {
        assert!(request("http://localhost:8080/article").validate().is_ok());
        assert!(request("https://dev.to/someone/article").validate().is_ok());
    }

    #[test]
    fn test_non_http_schemes_rejected() {
        for url in [
            "ftp://example.com/article",
            "mailto:someone@example.com",
            "file:///etc/passwd",
            "data:text/html,<h1>hi</h1>",
        ] {
            let errors = request(url).validate().unwrap_err();
            let url_errors = &errors.field_errors()["url"];

            assert_eq!(url_errors[0].code, "invalid_url", "{url}");
        }
    }

    #[test]
    fn test_empty_url_reports_required_only() {
        let errors = request("").validate().unwrap_err();
        let url_errors = &errors.field_errors()["url"];

        assert_eq!(url_errors.len(), 1);
        assert_eq!(url_errors[0].code, "required");
    }
}
