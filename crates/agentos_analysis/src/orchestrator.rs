use crate::CapabilityRegistry;
use agentos_core::{AgentOutput, AgentType, NarrativeContext};
use agentos_error::{AgentosError, AgentosResult};
use agentos_interface::{Capability, ContextSession, ContextSource};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::instrument;

/// Runs requested capabilities over context fetched once per request.
///
/// Each call opens its own host session and closes it before returning,
/// whether the analysis succeeded or not. No state is shared between calls.
#[derive(Clone)]
pub struct SceneAnalyzer {
    source: Arc<dyn ContextSource>,
    registry: Arc<CapabilityRegistry>,
}

impl SceneAnalyzer {
    /// Create an analyzer over a host context source and capability registry.
    pub fn new(source: Arc<dyn ContextSource>, registry: Arc<CapabilityRegistry>) -> Self {
        Self { source, registry }
    }

    /// Get the capability registry.
    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Analyze one scene with the requested capabilities.
    ///
    /// Outputs appear in request order, each tagged with its capability.
    /// Tags without a real implementation contribute nothing; when no
    /// requested tag is implemented the host is not contacted at all.
    #[instrument(skip(self, agent_types), fields(agents = ?agent_types))]
    pub async fn analyze(
        &self,
        project_id: &str,
        scene_id: &str,
        agent_types: &[AgentType],
    ) -> AgentosResult<Vec<AgentOutput>> {
        tracing::info!(project_id, scene_id, agents = ?agent_types, "scene-analysis requested");

        let plan = self.registry.resolve(agent_types);
        if plan.is_empty() {
            tracing::info!("No implemented capability requested");
            return Ok(Vec::new());
        }

        let session = self.source.open().await?;
        let result = run(session.as_ref(), project_id, scene_id, &plan).await;
        session.close().await;

        match &result {
            Ok(outputs) => tracing::info!(outputs = outputs.len(), "scene-analysis complete"),
            Err(e) => tracing::error!(error = %e, "scene-analysis failed"),
        }
        result
    }
}

async fn run(
    session: &dyn ContextSession,
    project_id: &str,
    scene_id: &str,
    plan: &[Arc<dyn Capability>],
) -> AgentosResult<Vec<AgentOutput>> {
    let (scene, canon, timeline) = tokio::try_join!(
        session.get_scene(scene_id),
        session.get_project_canon(project_id),
        session.get_project_scenes(project_id),
    )?;
    tracing::debug!(
        characters = canon.characters.len(),
        world_rules = canon.world_rules.len(),
        scenes = timeline.len(),
        "Context fetched"
    );

    let context = NarrativeContext::new(scene, canon, timeline);

    let batches = try_join_all(plan.iter().map(|capability| {
        let context = &context;
        async move {
            let agent_type = capability.agent_type();
            let findings = capability.analyze(context).await?;
            tracing::debug!(agent_type = %agent_type, findings = findings.len(), "Capability finished");
            Ok::<_, AgentosError>(
                findings
                    .into_iter()
                    .map(|finding| AgentOutput::from_finding(agent_type, finding))
                    .collect::<Vec<_>>(),
            )
        }
    }))
    .await?;

    Ok(batches.into_iter().flatten().collect())
}
