use agentos_core::{AgentType, Finding, NarrativeContext};
use agentos_error::AgentosResult;
use async_trait::async_trait;

/// One kind of scene analysis.
///
/// Every capability receives the same fetched context and returns its
/// findings in the order they should be reported.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Tag this capability answers to.
    fn agent_type(&self) -> AgentType;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Whether the capability produces real findings.
    ///
    /// Requests for capabilities that return `false` are skipped without error.
    fn is_implemented(&self) -> bool {
        true
    }

    /// Analyze the scene in `context`.
    async fn analyze(&self, context: &NarrativeContext) -> AgentosResult<Vec<Finding>>;
}
