//! Connection settings for the model provider.

use agentos_error::{ModelError, ModelErrorKind};

/// OpenRouter's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "anthropic/claude-3.5-sonnet";
/// Low temperature keeps analysis output stable.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
/// Upper bound on one completion call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for [`ChatCompletionClient`](crate::ChatCompletionClient).
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Base URL without the `/chat/completions` suffix
    pub base_url: String,
    /// Bearer credential
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion length cap; provider default when `None`
    pub max_tokens: Option<u32>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ModelConfig {
    /// Default settings with the given credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Cap completion length.
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Full URL of the completion endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Reject settings that cannot produce a working client.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.api_key.trim().is_empty() {
            return Err(ModelError::new(ModelErrorKind::Configuration(
                "model API key is empty".into(),
            )));
        }
        if self.base_url.trim().is_empty() {
            return Err(ModelError::new(ModelErrorKind::Configuration(
                "model base URL is empty".into(),
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ModelError::new(ModelErrorKind::Configuration(
                "model timeout must be greater than zero".into(),
            )));
        }
        Ok(())
    }
}
