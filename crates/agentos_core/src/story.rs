//! Story entities as served by the host application's internal API.
//!
//! Only the fields the analysis pipeline reads are modelled; everything else
//! in the host payloads is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// A place in the story world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Host identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Minimal character reference embedded in scene payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRef {
    /// Host identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// Join row linking a scene to a character present in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SceneCharacter {
    /// Character identifier
    #[serde(default)]
    pub character_id: Option<String>,
    /// Embedded character, when the host includes it
    #[serde(default)]
    pub character: Option<CharacterRef>,
}

impl SceneCharacter {
    /// Display name of the referenced character, if it was embedded.
    pub fn name(&self) -> Option<&str> {
        self.character.as_ref().map(|c| c.name.as_str())
    }
}

/// A scene, either the one under analysis or an entry in the timeline.
///
/// # Examples
///
/// ```
/// use agentos_core::Scene;
///
/// let scene: Scene = serde_json::from_str(r#"{
///     "id": "scn_1",
///     "title": "The Vault",
///     "summary": null,
///     "sequenceId": "seq_1",
///     "characters": [{"characterId": "chr_1", "character": {"id": "chr_1", "name": "Mara"}}]
/// }"#).unwrap();
///
/// assert_eq!(scene.title, "The Vault");
/// assert!(scene.summary.is_none());
/// assert_eq!(scene.character_names(), vec!["Mara"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Host identifier
    pub id: String,
    /// Position within its sequence
    #[serde(default)]
    pub index: Option<i64>,
    /// Scene title
    pub title: String,
    /// What happens
    #[serde(default)]
    pub summary: Option<String>,
    /// Why the scene exists in the story
    #[serde(default)]
    pub purpose: Option<String>,
    /// Emotional register
    #[serde(default)]
    pub tone: Option<String>,
    /// Where it takes place
    #[serde(default)]
    pub location: Option<Location>,
    /// Characters present
    #[serde(default)]
    pub characters: Vec<SceneCharacter>,
}

impl Scene {
    /// Names of the embedded characters present in this scene, in host order.
    pub fn character_names(&self) -> Vec<&str> {
        self.characters.iter().filter_map(SceneCharacter::name).collect()
    }
}

/// A fact recorded about a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterFact {
    /// What the fact is about
    pub label: String,
    /// The fact itself
    pub value: String,
    /// Whether other characters are supposed to know it
    #[serde(default)]
    pub is_secret: bool,
    /// Ids of other characters who know the fact
    #[serde(default)]
    pub known_by_ids: Vec<String>,
}

/// A character from the project canon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Host identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Biography
    #[serde(default)]
    pub bio: Option<String>,
    /// Archetype label
    #[serde(default)]
    pub archetype: Option<String>,
    /// Recorded facts
    #[serde(default)]
    pub facts: Vec<CharacterFact>,
}

/// A rule the story world obeys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldRule {
    /// Rule headline
    pub title: String,
    /// Full statement of the rule
    #[serde(default)]
    pub description: Option<String>,
    /// Grouping label
    #[serde(default)]
    pub category: Option<String>,
}

/// Everything established for a project: characters, locations and world rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Canon {
    /// Characters, each with their facts
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Known locations
    #[serde(default)]
    pub locations: Vec<Location>,
    /// World rules
    #[serde(default)]
    pub world_rules: Vec<WorldRule>,
}

impl Canon {
    /// Characters that carry at least one fact, in canon order.
    pub fn characters_with_facts(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(|c| !c.facts.is_empty())
    }

    /// Display name of the character with `id`, if the canon has one.
    pub fn character_name(&self, id: &str) -> Option<&str> {
        self.characters
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}
