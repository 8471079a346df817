//! Layered service configuration.

use agentos_analysis::RetryPolicy;
use agentos_error::{AgentosResult, ConfigError};
use agentos_host::HostConfig;
use agentos_models::ModelConfig;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled defaults, lowest precedence.
const DEFAULT_CONFIG: &str = include_str!("../../../agentos.toml");

/// Legacy variable names and the keys they override.
const LEGACY_VARS: &[(&str, &str)] = &[
    ("OPENROUTER_API_KEY", "model.api_key"),
    ("OPENROUTER_MODEL", "model.model"),
    ("OPENROUTER_BASE_URL", "model.base_url"),
    ("DIRECTORIS_API_URL", "host.base_url"),
    ("DIRECTORIS_API_KEY", "host.api_key"),
];

/// Where the optional user configuration comes from.
#[derive(Debug, Clone, Copy)]
pub enum ConfigFile<'a> {
    /// A file that must exist
    Path(&'a Path),
    /// Inline TOML
    Toml(&'a str),
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Listen address
    pub bind: String,
    /// Name reported by `/health`
    pub service_name: String,
}

/// `[model]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// OpenAI-compatible base URL
    pub base_url: String,
    /// Bearer credential
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion length cap
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Per-call timeout
    pub timeout_secs: u64,
    /// Retries for transient model failures
    pub max_retries: usize,
    /// Initial retry backoff
    pub retry_base_ms: u64,
}

/// `[host]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSettings {
    /// Host application base URL
    pub base_url: String,
    /// Shared secret
    pub api_key: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerSettings,
    /// Model provider settings
    pub model: ModelSettings,
    /// Host application settings
    pub host: HostSettings,
}

impl AppConfig {
    /// Load from the process environment.
    ///
    /// Reads `path` when given, otherwise `./agentos.toml` if present.
    pub fn load(path: Option<&Path>) -> AgentosResult<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::load_with(path.map(ConfigFile::Path), &vars)
    }

    /// Load with an explicit user file and variable set.
    ///
    /// Sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults
    /// 2. `file`, or `./agentos.toml` when `file` is `None`
    /// 3. `AGENTOS__SECTION__KEY` entries of `vars`
    /// 4. Legacy `OPENROUTER_*` / `DIRECTORIS_*` entries of `vars`
    #[instrument(skip_all)]
    pub fn load_with(file: Option<ConfigFile<'_>>, vars: &HashMap<String, String>) -> AgentosResult<Self> {
        debug!("Loading configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        builder = match file {
            Some(ConfigFile::Path(path)) => {
                debug!(path = %path.display(), "Using configuration file");
                builder.add_source(File::from(path))
            }
            Some(ConfigFile::Toml(text)) => builder.add_source(File::from_str(text, FileFormat::Toml)),
            None => builder.add_source(File::with_name("agentos").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("AGENTOS")
                .prefix_separator("__")
                .separator("__")
                .source(Some(vars.clone().into_iter().collect())),
        );

        for (var, key) in LEGACY_VARS {
            let value = vars.get(*var).filter(|v| !v.trim().is_empty()).cloned();
            if value.is_some() {
                debug!(var, key, "Applying legacy variable");
            }
            builder = builder.set_override_option(*key, value).map_err(|e| {
                ConfigError::new(format!("Failed to apply {}: {}", var, e))
            })?;
        }

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }

    /// Reject configurations the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.api_key.trim().is_empty() {
            return Err(ConfigError::new(
                "model.api_key is empty; set OPENROUTER_API_KEY or AGENTOS__MODEL__API_KEY",
            ));
        }
        if self.host.api_key.trim().is_empty() {
            return Err(ConfigError::new(
                "host.api_key is empty; set DIRECTORIS_API_KEY or AGENTOS__HOST__API_KEY",
            ));
        }
        if self.model.timeout_secs == 0 {
            return Err(ConfigError::new("model.timeout_secs must be greater than zero"));
        }
        if self.host.timeout_secs == 0 {
            return Err(ConfigError::new("host.timeout_secs must be greater than zero"));
        }
        if !(0.0..=2.0).contains(&self.model.temperature) {
            return Err(ConfigError::new(format!(
                "model.temperature must be within 0.0..=2.0, got {}",
                self.model.temperature
            )));
        }
        self.bind_addr()?;
        Ok(())
    }

    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind.parse().map_err(|e| {
            ConfigError::new(format!("server.bind {:?} is not a socket address: {}", self.server.bind, e))
        })
    }

    /// Settings for the model client.
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig::new(self.model.api_key.clone())
            .with_base_url(self.model.base_url.clone())
            .with_model(self.model.model.clone())
            .with_temperature(self.model.temperature)
            .with_max_tokens(self.model.max_tokens)
            .with_timeout_secs(self.model.timeout_secs)
    }

    /// Settings for the host client.
    pub fn host_config(&self) -> HostConfig {
        HostConfig::new(self.host.base_url.clone(), self.host.api_key.clone())
            .with_timeout_secs(self.host.timeout_secs)
    }

    /// Retry policy for model calls.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.model.max_retries, self.model.retry_base_ms)
    }
}
