//! Inbound HTTP contract shared with the host application.

use crate::{AgentType, Finding, Severity};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_language() -> String {
    "en".to_string()
}

/// Body of `POST /agents/scene-analysis`.
///
/// # Examples
///
/// ```
/// use agentos_core::{AgentType, SceneAnalysisRequest};
///
/// let request: SceneAnalysisRequest = serde_json::from_str(
///     r#"{"projectId": "p1", "sceneId": "s1", "agentTypes": ["CONTINUITY"]}"#,
/// ).unwrap();
///
/// assert_eq!(request.agent_types, vec![AgentType::Continuity]);
/// assert_eq!(request.language, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneAnalysisRequest {
    /// Project the scene belongs to
    pub project_id: String,
    /// Scene to analyze
    pub scene_id: String,
    /// Capabilities to run, in the order their findings should appear
    pub agent_types: Vec<AgentType>,
    /// Preferred response language
    #[serde(default = "default_language")]
    pub language: String,
}

/// One finding tagged with the capability that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentOutput {
    /// Producing capability
    pub agent_type: AgentType,
    /// Severity of the finding
    pub severity: Severity,
    /// Short headline
    pub title: String,
    /// Explanation
    pub content: String,
    /// Structured metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl AgentOutput {
    /// Tag a finding with its producing capability.
    pub fn from_finding(agent_type: AgentType, finding: Finding) -> Self {
        Self {
            agent_type,
            severity: finding.severity,
            title: finding.title,
            content: finding.content,
            metadata: finding.metadata,
        }
    }
}

/// Response of `POST /agents/scene-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SceneAnalysisResponse {
    /// Findings from every requested capability, in request order
    pub outputs: Vec<AgentOutput>,
}

/// Body of `POST /agents/shot-suggestions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotSuggestionsRequest {
    /// Project the scene belongs to
    pub project_id: String,
    /// Scene to plan shots for
    pub scene_id: String,
}

/// A proposed shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotSuggestion {
    /// Shot type, e.g. `WIDE` or `CLOSE_UP`
    #[serde(rename = "type")]
    pub shot_type: String,
    /// What the shot shows
    pub description: String,
    /// Estimated duration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<u32>,
    /// Position in the shot list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Structured metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Response of `POST /agents/shot-suggestions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShotSuggestionsResponse {
    /// Proposed shots
    pub suggestions: Vec<ShotSuggestion>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process is up
    pub status: String,
    /// Service name
    pub service: String,
}

impl HealthResponse {
    /// Healthy response for the named service.
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.into(),
        }
    }
}
