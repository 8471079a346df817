//! Host connection settings.

use agentos_error::{HostError, HostErrorKind};
use reqwest::Url;

/// Header carrying the shared secret.
pub const AGENTOS_KEY_HEADER: &str = "X-AgentOS-Key";
/// Host base URL used when none is configured.
pub const DEFAULT_HOST_URL: &str = "http://localhost:3000";
/// Upper bound on one host request.
pub const DEFAULT_HOST_TIMEOUT_SECS: u64 = 30;

/// Settings for [`HostContextSource`](crate::HostContextSource).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostConfig {
    /// Base URL of the host application (e.g., "http://localhost:3000")
    pub base_url: String,
    /// Shared secret sent in [`AGENTOS_KEY_HEADER`]
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HostConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_HOST_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Absolute URL for an endpoint given as path segments.
    ///
    /// Each segment is percent-encoded, so identifiers containing `/`, `?` or
    /// `#` stay inside their own segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use agentos_host::HostConfig;
    ///
    /// let config = HostConfig::new("http://localhost:3000/", "secret");
    /// let url = config.url(&["internal", "scenes", "../canon"]).unwrap();
    /// assert_eq!(url.path(), "/internal/scenes/..%2Fcanon");
    /// ```
    #[track_caller]
    pub fn url(&self, segments: &[&str]) -> Result<Url, HostError> {
        let mut url = self.parsed_base_url()?;
        url.path_segments_mut()
            .map_err(|_| {
                HostError::new(HostErrorKind::Configuration(format!(
                    "host base URL cannot carry a path: {}",
                    self.base_url
                )))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[track_caller]
    fn parsed_base_url(&self) -> Result<Url, HostError> {
        Url::parse(self.base_url.trim()).map_err(|e| {
            HostError::new(HostErrorKind::Configuration(format!(
                "invalid host base URL {:?}: {}",
                self.base_url, e
            )))
        })
    }

    /// Reject settings that cannot produce a working client.
    #[track_caller]
    pub fn validate(&self) -> Result<(), HostError> {
        if self.api_key.trim().is_empty() {
            return Err(HostError::new(HostErrorKind::Configuration(
                "host API key is empty".into(),
            )));
        }
        if self.base_url.trim().is_empty() {
            return Err(HostError::new(HostErrorKind::Configuration(
                "host base URL is empty".into(),
            )));
        }
        self.parsed_base_url()?;
        if self.timeout_secs == 0 {
            return Err(HostError::new(HostErrorKind::Configuration(
                "host timeout must be greater than zero".into(),
            )));
        }
        Ok(())
    }
}
