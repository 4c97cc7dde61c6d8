//! Configuration constants, environment loading, and input validation.

use crate::error::{GeneratorError, Result};

/// Base URL for the xAI API (OpenAI-compatible chat completions).
pub const XAI_API_BASE_URL: &str = "https://api.x.ai/v1";

/// Default model identifier. Newer grok releases can be substituted via
/// the `XAI_MODEL` environment variable.
pub const DEFAULT_MODEL: &str = "grok-3";

/// Token budget for the completion. A batch of 100 attractions with
/// addresses and descriptions needs a few thousand tokens.
pub const MAX_COMPLETION_TOKENS: u32 = 8000;

/// Sampling temperature. Fixed, high enough for varied attractions.
pub const SAMPLING_TEMPERATURE: f64 = 0.7;

/// HTTP timeout in seconds. Large batch completions routinely take more
/// than a minute to stream back.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Number of attractions requested when no count is given.
pub const DEFAULT_ATTRACTION_COUNT: usize = 100;

/// Default CSV output filename.
pub const DEFAULT_OUTPUT_FILENAME: &str = "data.csv";

/// Number of characters of raw response text included in parse errors.
pub const RESPONSE_PREVIEW_CHARS: usize = 500;

/// Environment variable holding the xAI API key.
pub const API_KEY_ENV: &str = "XAI_API_KEY";

/// Environment variable overriding the model identifier.
pub const MODEL_ENV: &str = "XAI_MODEL";

/// Environment variable overriding the API base URL.
pub const API_BASE_URL_ENV: &str = "XAI_API_BASE_URL";

/// Environment variable overriding the HTTP timeout in seconds.
pub const TIMEOUT_ENV: &str = "XAI_TIMEOUT_SECS";

/// Configuration for one generation run.
///
/// The credential is always injected explicitly, either read once from the
/// environment by [`GeneratorConfig::from_env`] or passed to
/// [`GeneratorConfig::builder`]. Components never consult the environment
/// themselves.
#[derive(Clone)]
pub struct GeneratorConfig {
    /// xAI API key.
    pub api_key: String,
    /// Model identifier sent with the request.
    pub model: String,
    /// API base URL, without the `/chat/completions` suffix.
    pub api_base_url: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

// Manual Debug so the credential never ends up in logs.
impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when `XAI_API_KEY` is unset or blank, so the credential check
    /// happens before any network activity.
    ///
    /// # Errors
    /// Returns `GeneratorError::Config` if the API key is missing.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(GeneratorError::Config(format!(
                "{API_KEY_ENV} is not set. Export it (or put it in a .env file) \
                 with an xAI API key from https://console.x.ai/"
            )));
        }

        let model = std::env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_base_url =
            std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| XAI_API_BASE_URL.to_string());
        let timeout_secs = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            model,
            api_base_url,
            timeout_secs,
        })
    }

    /// Create a configuration builder with an explicitly injected credential.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base_url: XAI_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Builder for [`GeneratorConfig`].
pub struct GeneratorConfigBuilder {
    api_key: String,
    model: String,
    api_base_url: String,
    timeout_secs: u64,
}

impl GeneratorConfigBuilder {
    /// Set the model identifier.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Set the HTTP timeout in seconds.
    #[must_use]
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig {
            api_key: self.api_key,
            model: self.model,
            api_base_url: self.api_base_url,
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Validate the requested attraction count.
///
/// # Arguments
/// * `count` - Number of attractions to request
///
/// # Errors
/// Returns `GeneratorError::InvalidCount` for a zero count.
///
/// # Examples
/// ```
/// use austin_attractions::config::validate_count;
///
/// assert!(validate_count(100).is_ok());
/// assert!(validate_count(0).is_err());
/// ```
pub fn validate_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(GeneratorError::InvalidCount(count));
    }
    Ok(())
}

/// Build the chat-completions endpoint URL from a base URL.
///
/// # Examples
/// ```
/// use austin_attractions::config::chat_completions_url;
///
/// assert_eq!(
///     chat_completions_url("https://api.x.ai/v1"),
///     "https://api.x.ai/v1/chat/completions"
/// );
/// assert_eq!(
///     chat_completions_url("http://localhost:8080/"),
///     "http://localhost:8080/chat/completions"
/// );
/// ```
#[must_use]
pub fn chat_completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_count_accepts_positive() {
        assert!(validate_count(1).is_ok());
        assert!(validate_count(100).is_ok());
        assert!(validate_count(5000).is_ok());
    }

    #[test]
    fn test_validate_count_rejects_zero() {
        let err = validate_count(0).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidCount(0)));
    }

    #[test]
    fn test_chat_completions_url_strips_trailing_slash() {
        assert_eq!(
            chat_completions_url("http://127.0.0.1:9999///"),
            "http://127.0.0.1:9999/chat/completions"
        );
    }

    #[test]
    fn test_builder_defaults() {
        let config = GeneratorConfig::builder("key-123").build();
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base_url, XAI_API_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::builder("key-123")
            .model("grok-4")
            .api_base_url("http://localhost:1234")
            .timeout_secs(5)
            .build();
        assert_eq!(config.model, "grok-4");
        assert_eq!(config.api_base_url, "http://localhost:1234");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GeneratorConfig::builder("super-secret").build();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[redacted]"));
    }

    // Environment mutation is kept in a single test so parallel test
    // threads never observe each other's changes.
    #[test]
    fn test_from_env() {
        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(MODEL_ENV);
        std::env::remove_var(API_BASE_URL_ENV);
        std::env::remove_var(TIMEOUT_ENV);

        let err = GeneratorConfig::from_env().unwrap_err();
        assert!(matches!(err, GeneratorError::Config(_)));
        assert!(err.to_string().contains(API_KEY_ENV));

        std::env::set_var(API_KEY_ENV, "   ");
        assert!(GeneratorConfig::from_env().is_err());

        std::env::set_var(API_KEY_ENV, "xai-test-key");
        std::env::set_var(MODEL_ENV, "grok-4");
        std::env::set_var(TIMEOUT_ENV, "not-a-number");
        let config = GeneratorConfig::from_env().unwrap();
        assert_eq!(config.api_key, "xai-test-key");
        assert_eq!(config.model, "grok-4");
        assert_eq!(config.api_base_url, XAI_API_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(MODEL_ENV);
        std::env::remove_var(TIMEOUT_ENV);
    }
}
