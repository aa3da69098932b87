//! Azure Translator (Text API v3) client.

use super::service::{TranslationError, TranslationResult, Translator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

/// Returned when the provider answers successfully but without any translation.
pub const TRANSLATION_NOT_AVAILABLE: &str = "Translation not available";

const API_VERSION: &str = "3.0";

/// Connection settings for the live provider.
#[derive(Clone)]
pub struct AzureSettings {
    pub endpoint: String,
    pub key: String,
    pub region: String,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct TranslateInput<'a> {
    #[serde(rename = "Text")]
    text: &'a str,
}

#[derive(Deserialize)]
struct TranslateItem {
    #[serde(default)]
    translations: Vec<TranslationCandidate>,
}

#[derive(Deserialize)]
struct TranslationCandidate {
    text: String,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// Translator backed by the Azure Translator REST API.
///
/// Holds a single pooled HTTP client reused for every request. The client is
/// configured with a per-call timeout; a timed-out call surfaces as
/// [`TranslationError::Timeout`].
pub struct AzureTranslator {
    client: Client,
    translate_url: Url,
    key: String,
    region: String,
}

impl AzureTranslator {
    /// Builds the client and resolves the `/translate` URL.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::Network`] if the endpoint is not a valid URL
    /// or the HTTP client cannot be constructed.
    pub fn new(settings: AzureSettings) -> TranslationResult<Self> {
        let translate_url = translate_url(&settings.endpoint)?;

        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| TranslationError::Network(format!("Failed to build HTTP client: {}", e)))?;

        info!("Azure translator configured for {}", translate_url);

        Ok(Self {
            client,
            translate_url,
            key: settings.key,
            region: settings.region,
        })
    }

    fn request_url(&self, target_language: &str, source_language: Option<&str>) -> Url {
        let mut url = self.translate_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api-version", API_VERSION);
            query.append_pair("to", target_language);
            if let Some(from) = source_language.filter(|s| !s.is_empty()) {
                query.append_pair("from", from);
            }
        }
        url
    }
}

/// Appends the `translate` path segment to the configured endpoint.
fn translate_url(endpoint: &str) -> TranslationResult<Url> {
    let mut base = Url::parse(endpoint)
        .map_err(|e| TranslationError::Network(format!("Invalid translator endpoint: {}", e)))?;

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join("translate")
        .map_err(|e| TranslationError::Network(format!("Invalid translator endpoint: {}", e)))
}

#[async_trait]
impl Translator for AzureTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> TranslationResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let url = self.request_url(target_language, source_language);
        debug!(
            target = target_language,
            source = source_language.unwrap_or("auto"),
            chars = text.chars().count(),
            "Calling Azure translator"
        );

        let response = self
            .client
            .post(url)
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
            .json(&[TranslateInput { text }])
            .send()
            .await
            .map_err(|e| {
                error!("Azure translator request failed: {}", e);
                TranslationError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());

            error!(status = status.as_u16(), "Azure translator rejected request: {}", message);
            return Err(TranslationError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let items: Vec<TranslateItem> = response.json().await?;

        Ok(items
            .into_iter()
            .next()
            .and_then(|item| item.translations.into_iter().next())
            .map(|candidate| candidate.text)
            .unwrap_or_else(|| TRANSLATION_NOT_AVAILABLE.to_string()))
    }

    fn describe(&self) -> String {
        format!("Azure translator ({})", self.region)
    }
}
