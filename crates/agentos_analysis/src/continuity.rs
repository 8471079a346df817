use crate::{RetryPolicy, invoke_model, reconcile, serialize_context};
use agentos_core::{AgentType, Finding, NarrativeContext};
use agentos_error::AgentosResult;
use agentos_interface::{Capability, ModelDriver};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Persona and output contract for continuity checking.
pub const CONTINUITY_SYSTEM_PROMPT: &str = "\
You are a continuity supervisor for a long-running show.
Check the current scene against:
- World rules established in the project
- Character knowledge (who knows what, and when). Facts marked [SECRET] are known only to their owner and the characters listed after \"known by\", unless an earlier scene revealed them.
- Timeline consistency (events happen in logical order)
- Location state (places that were destroyed, changed, etc.)

Respond with a JSON array and nothing else: no prose, no markdown fences.
Each element is an object with these fields:
- \"severity\": one of \"INFO\", \"WARNING\", \"ERROR\"
- \"title\": a short headline
- \"content\": an explanation of the issue
- \"metadata\": an object, optionally with \"characterName\", \"ruleTitle\" and \"relatedSceneTitles\" (an array of scene titles)

If the scene has no continuity issues, respond with [].";

/// Checks a scene against world rules, character knowledge, timeline and locations.
pub struct ContinuityCapability {
    driver: Arc<dyn ModelDriver>,
    retry: RetryPolicy,
}

impl ContinuityCapability {
    /// Create the capability over a model driver.
    pub fn new(driver: Arc<dyn ModelDriver>, retry: RetryPolicy) -> Self {
        Self { driver, retry }
    }
}

#[async_trait]
impl Capability for ContinuityCapability {
    fn agent_type(&self) -> AgentType {
        AgentType::Continuity
    }

    fn description(&self) -> &str {
        "Checks world rules, character knowledge, timeline order and location state"
    }

    #[instrument(skip_all, fields(scene_id = %context.scene().id, prior_scenes = context.prior_scenes().len()))]
    async fn analyze(&self, context: &NarrativeContext) -> AgentosResult<Vec<Finding>> {
        let user = serialize_context(context);

        let raw = self
            .retry
            .run("continuity", || {
                invoke_model(self.driver.as_ref(), CONTINUITY_SYSTEM_PROMPT, &user)
            })
            .await?;

        let findings = reconcile(&raw);
        tracing::info!(scene_id = %context.scene().id, issues = findings.len(), "continuity check complete");
        Ok(findings)
    }
}
