use agentos_core::{GenerateRequest, GenerateResponse};
use agentos_error::AgentosResult;
use async_trait::async_trait;

/// Core trait that every language model backend implements.
#[async_trait]
pub trait ModelDriver: Send + Sync {
    /// Run one chat completion and return the raw text.
    async fn generate(&self, req: &GenerateRequest) -> AgentosResult<GenerateResponse>;

    /// Provider name (e.g., "openrouter").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "anthropic/claude-3.5-sonnet").
    fn model_name(&self) -> &str;
}
