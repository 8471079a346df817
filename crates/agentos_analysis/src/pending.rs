use agentos_core::{AgentType, Finding, NarrativeContext};
use agentos_error::AgentosResult;
use agentos_interface::Capability;
use async_trait::async_trait;

/// A capability that is part of the contract but not built yet.
///
/// Requests for it are accepted and produce no findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCapability {
    agent_type: AgentType,
    description: &'static str,
}

impl PendingCapability {
    /// Scene purpose, conflict, turn and outcome.
    pub fn story_structure() -> Self {
        Self {
            agent_type: AgentType::StoryStructure,
            description: "Evaluates scene purpose, stakes, turn and outcome within its sequence",
        }
    }

    /// Voice, arc, relationships and motivation.
    pub fn character() -> Self {
        Self {
            agent_type: AgentType::Character,
            description: "Checks dialogue voice, arc progression, relationships and motivation",
        }
    }

    /// Shot planning.
    pub fn storyboard() -> Self {
        Self {
            agent_type: AgentType::Storyboard,
            description: "Proposes shots and coverage for the scene",
        }
    }
}

#[async_trait]
impl Capability for PendingCapability {
    fn agent_type(&self) -> AgentType {
        self.agent_type
    }

    fn description(&self) -> &str {
        self.description
    }

    fn is_implemented(&self) -> bool {
        false
    }

    async fn analyze(&self, _context: &NarrativeContext) -> AgentosResult<Vec<Finding>> {
        Ok(Vec::new())
    }
}
