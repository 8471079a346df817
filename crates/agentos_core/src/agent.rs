//! Analysis capability tags.

use serde::{Deserialize, Serialize};

/// One kind of scene analysis a caller can request.
///
/// Serialized in the wire contract as `SCREAMING_SNAKE_CASE`.
///
/// # Examples
///
/// ```
/// use agentos_core::AgentType;
///
/// let parsed: AgentType = serde_json::from_str("\"STORY_STRUCTURE\"").unwrap();
/// assert_eq!(parsed, AgentType::StoryStructure);
/// assert_eq!(AgentType::Continuity.to_string(), "CONTINUITY");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentType {
    /// World rules, character knowledge, timeline and location consistency
    Continuity,
    /// Scene purpose, conflict, turn and outcome
    StoryStructure,
    /// Voice, arc and relationship consistency
    Character,
    /// Cinematography and shot planning
    Storyboard,
}
