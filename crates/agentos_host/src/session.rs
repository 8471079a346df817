use crate::{AGENTOS_KEY_HEADER, HostConfig};
use agentos_core::{Canon, Scene, Timeline};
use agentos_error::{AgentosResult, HostError, HostErrorKind};
use agentos_interface::{ContextSession, ContextSource};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::instrument;

/// Opens [`HostSession`]s against the configured host.
#[derive(Debug, Clone)]
pub struct HostContextSource {
    config: Arc<HostConfig>,
}

impl HostContextSource {
    /// Create a source, validating the configuration.
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Get the host configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Open a concrete session.
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub fn open_session(&self) -> Result<HostSession, HostError> {
        let mut key = HeaderValue::from_str(&self.config.api_key).map_err(|e| {
            HostError::new(HostErrorKind::Configuration(format!(
                "host API key is not a valid header value: {}",
                e
            )))
        })?;
        key.set_sensitive(true);

        let name = HeaderName::from_bytes(AGENTOS_KEY_HEADER.as_bytes()).map_err(|e| {
            HostError::new(HostErrorKind::Configuration(format!("invalid header name: {}", e)))
        })?;
        let mut headers = HeaderMap::new();
        headers.insert(name, key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()
            .map_err(|e| {
                HostError::new(HostErrorKind::Configuration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        tracing::debug!("Opened host session");
        Ok(HostSession {
            config: Arc::clone(&self.config),
            client: Mutex::new(Some(client)),
        })
    }
}

#[async_trait]
impl ContextSource for HostContextSource {
    async fn open(&self) -> AgentosResult<Box<dyn ContextSession>> {
        Ok(Box::new(self.open_session()?))
    }
}

/// One request's connection to the host.
///
/// Owns its own connection pool. [`close`](ContextSession::close) drops the
/// pool; later fetches fail with [`HostErrorKind::SessionClosed`]. Dropping an
/// unclosed session releases the pool as well.
#[derive(Debug)]
pub struct HostSession {
    config: Arc<HostConfig>,
    client: Mutex<Option<reqwest::Client>>,
}

impl HostSession {
    /// Whether [`close`](ContextSession::close) has run.
    pub fn is_closed(&self) -> bool {
        self.slot().is_none()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<reqwest::Client>> {
        self.client.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn take_client(&self) -> Option<reqwest::Client> {
        self.slot().take()
    }

    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, HostError> {
        let client = self
            .slot()
            .clone()
            .ok_or_else(|| HostError::new(HostErrorKind::SessionClosed))?;

        let url = self.config.url(segments)?;
        let endpoint = url.path().to_string();
        tracing::debug!(url = %url, "Fetching from host");

        let response = client.get(url).send().await.map_err(|e| {
            tracing::error!(error = %e, "Host request failed");
            let message = if e.is_timeout() {
                format!("timed out after {}s", self.config.timeout_secs)
            } else {
                e.to_string()
            };
            HostError::new(HostErrorKind::Transport(message))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Host returned error");
            return Err(HostError::new(HostErrorKind::Status {
                endpoint: endpoint.clone(),
                status: status.as_u16(),
            }));
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read host response");
            HostError::new(HostErrorKind::Transport(e.to_string()))
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to decode host response");
            HostError::new(HostErrorKind::Deserialization {
                endpoint,
                message: e.to_string(),
            })
        })
    }
}

#[async_trait]
impl ContextSession for HostSession {
    async fn get_scene(&self, scene_id: &str) -> AgentosResult<Scene> {
        Ok(self.get_json(&["internal", "scenes", scene_id]).await?)
    }

    async fn get_project_canon(&self, project_id: &str) -> AgentosResult<Canon> {
        Ok(self
            .get_json(&["internal", "projects", project_id, "canon"])
            .await?)
    }

    async fn get_project_scenes(&self, project_id: &str) -> AgentosResult<Timeline> {
        let scenes: Vec<Scene> = self
            .get_json(&["internal", "projects", project_id, "scenes"])
            .await?;
        Ok(Timeline::new(scenes))
    }

    async fn close(&self) {
        if self.take_client().is_some() {
            tracing::debug!("Closed host session");
        }
    }
}

impl Drop for HostSession {
    fn drop(&mut self) {
        if self.take_client().is_some() {
            tracing::debug!("Host session dropped before close; releasing connections");
        }
    }
}
