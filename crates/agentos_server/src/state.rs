use crate::AppConfig;
use agentos_analysis::{CapabilityRegistry, SceneAnalyzer};
use agentos_error::AgentosResult;
use agentos_host::HostContextSource;
use agentos_interface::{ContextSource, ModelDriver};
use agentos_models::ChatCompletionClient;
use std::sync::Arc;
use tracing::info;

/// Shared, immutable state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    analyzer: SceneAnalyzer,
    service_name: Arc<str>,
}

impl AppState {
    /// Create state from already constructed collaborators.
    pub fn new(analyzer: SceneAnalyzer, service_name: impl Into<Arc<str>>) -> Self {
        Self {
            analyzer,
            service_name: service_name.into(),
        }
    }

    /// Wire the model client, host client and default capabilities.
    pub fn from_config(config: &AppConfig) -> AgentosResult<Self> {
        config.validate()?;

        let driver: Arc<dyn ModelDriver> = Arc::new(ChatCompletionClient::new(config.model_config())?);
        let source: Arc<dyn ContextSource> = Arc::new(HostContextSource::new(config.host_config())?);
        let registry = CapabilityRegistry::with_defaults(Arc::clone(&driver), config.retry_policy());

        info!(
            provider = driver.provider_name(),
            model = driver.model_name(),
            host = %config.host.base_url,
            capabilities = registry.len(),
            "Analysis pipeline ready"
        );

        Ok(Self::new(
            SceneAnalyzer::new(source, Arc::new(registry)),
            config.server.service_name.as_str(),
        ))
    }

    /// Get the scene analyzer.
    pub fn analyzer(&self) -> &SceneAnalyzer {
        &self.analyzer
    }

    /// Name reported by `/health`.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}
