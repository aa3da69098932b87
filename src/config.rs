//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed explicitly to
//! the server. Nothing reads the environment after startup.
//!
//! ## Translator
//!
//! ```bash
//! # Offline development: deterministic mock translations
//! export TRANSLATOR_USE_MOCK=true
//!
//! # Live Azure Translator
//! export TRANSLATOR_ENDPOINT="https://api.cognitive.microsofttranslator.com/"
//! export TRANSLATOR_KEY="<subscription key>"
//! export TRANSLATOR_REGION="westeurope"
//! ```
//!
//! `TRANSLATOR_ENDPOINT`, `TRANSLATOR_KEY` and `TRANSLATOR_REGION` are required
//! only when `TRANSLATOR_USE_MOCK` is not enabled.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TRANSLATOR_TIMEOUT_SECONDS` - Provider call timeout (default: 10)
//! - `FETCH_TIMEOUT_SECONDS` - Article fetch timeout (default: 15)
//! - `FETCH_USER_AGENT` - User agent for article fetches (default: desktop Chrome)
//! - `TITLE_SELECTOR` - CSS selector for the article title (default: dev.to layout)
//! - `CONTENT_SELECTOR` - CSS selector for the article body (default: dev.to layout)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::infrastructure::fetcher::BROWSER_USER_AGENT;
use crate::infrastructure::html::{
    DEFAULT_CONTENT_SELECTOR, DEFAULT_TITLE_SELECTOR, ExtractionRules,
};
use crate::infrastructure::translator::AzureSettings;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub translator: TranslatorConfig,
    /// Timeout for a single article fetch in seconds (`FETCH_TIMEOUT_SECONDS`, default: 15).
    pub fetch_timeout_seconds: u64,
    pub fetch_user_agent: String,
    pub title_selector: String,
    pub content_selector: String,
}

/// Translator selection and credentials.
#[derive(Clone)]
pub struct TranslatorConfig {
    /// Use the deterministic mock instead of the live provider (`TRANSLATOR_USE_MOCK`).
    pub use_mock: bool,
    pub endpoint: Option<String>,
    /// Subscription key. Never printed; see the `Debug` impl.
    pub key: Option<String>,
    pub region: Option<String>,
    /// Timeout for a single provider call in seconds (`TRANSLATOR_TIMEOUT_SECONDS`, default: 10).
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("use_mock", &self.use_mock)
            .field("endpoint", &self.endpoint)
            .field("key", &self.key.as_deref().map(mask_secret))
            .field("region", &self.region)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let translator = Self::load_translator()?;

        let fetch_timeout_seconds = parse_var("FETCH_TIMEOUT_SECONDS", 15)?;

        let fetch_user_agent =
            env::var("FETCH_USER_AGENT").unwrap_or_else(|_| BROWSER_USER_AGENT.to_string());

        let title_selector =
            env::var("TITLE_SELECTOR").unwrap_or_else(|_| DEFAULT_TITLE_SELECTOR.to_string());
        let content_selector =
            env::var("CONTENT_SELECTOR").unwrap_or_else(|_| DEFAULT_CONTENT_SELECTOR.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            translator,
            fetch_timeout_seconds,
            fetch_user_agent,
            title_selector,
            content_selector,
        })
    }

    /// Loads translator settings. Credentials are read even in mock mode but
    /// only validated when the live provider is selected.
    fn load_translator() -> Result<TranslatorConfig> {
        let use_mock = env::var("TRANSLATOR_USE_MOCK")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let endpoint = env::var("TRANSLATOR_ENDPOINT").ok();
        let key = env::var("TRANSLATOR_KEY").ok();
        let region = env::var("TRANSLATOR_REGION").ok();

        let timeout_seconds = parse_var("TRANSLATOR_TIMEOUT_SECONDS", 10)?;

        Ok(TranslatorConfig {
            use_mock,
            endpoint,
            key,
            region,
            timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - a timeout is zero
    /// - live mode is selected and endpoint, key or region is missing
    /// - a selector cannot be parsed
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.fetch_timeout_seconds == 0 {
            anyhow::bail!("FETCH_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.translator.timeout_seconds == 0 {
            anyhow::bail!("TRANSLATOR_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.fetch_user_agent.trim().is_empty() {
            anyhow::bail!("FETCH_USER_AGENT must not be empty");
        }

        if !self.translator.use_mock {
            self.validate_live_translator()?;
        }

        self.extraction_rules()?;

        Ok(())
    }

    fn validate_live_translator(&self) -> Result<()> {
        let endpoint = self
            .translator
            .endpoint
            .as_deref()
            .context("TRANSLATOR_ENDPOINT must be set unless TRANSLATOR_USE_MOCK is enabled")?;

        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            anyhow::bail!(
                "TRANSLATOR_ENDPOINT must start with 'http://' or 'https://', got '{}'",
                endpoint
            );
        }

        if self.translator.key.as_deref().is_none_or(str::is_empty) {
            anyhow::bail!("TRANSLATOR_KEY must be set unless TRANSLATOR_USE_MOCK is enabled");
        }

        if self.translator.region.as_deref().is_none_or(str::is_empty) {
            anyhow::bail!("TRANSLATOR_REGION must be set unless TRANSLATOR_USE_MOCK is enabled");
        }

        Ok(())
    }

    /// Parses the configured title and content selectors.
    ///
    /// # Errors
    ///
    /// Returns an error naming the selector that failed to parse.
    pub fn extraction_rules(&self) -> Result<ExtractionRules> {
        ExtractionRules::new(&self.title_selector, &self.content_selector)
            .context("Invalid extraction selector")
    }

    /// Live provider settings, or `None` when the mock is selected.
    pub fn azure_settings(&self) -> Option<AzureSettings> {
        if self.translator.use_mock {
            return None;
        }

        Some(AzureSettings {
            endpoint: self.translator.endpoint.clone().unwrap_or_default(),
            key: self.translator.key.clone().unwrap_or_default(),
            region: self.translator.region.clone().unwrap_or_default(),
            timeout: Duration::from_secs(self.translator.timeout_seconds),
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if self.translator.use_mock {
            tracing::info!("  Translator: mock");
        } else {
            tracing::info!(
                "  Translator: {} (region: {}, key: {})",
                self.translator.endpoint.as_deref().unwrap_or_default(),
                self.translator.region.as_deref().unwrap_or_default(),
                mask_secret(self.translator.key.as_deref().unwrap_or_default())
            );
        }

        tracing::info!("  Translator timeout: {}s", self.translator.timeout_seconds);
        tracing::info!("  Fetch timeout: {}s", self.fetch_timeout_seconds);
        tracing::info!("  Title selector: {}", self.title_selector);
        tracing::info!("  Content selector: {}", self.content_selector);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a non-negative integer, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

/// Masks a secret for logging, keeping only the last four characters.
///
/// Short secrets are masked entirely.
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
