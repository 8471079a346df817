//! Story fixtures.

use agentos_core::{
    Canon, Character, CharacterFact, CharacterRef, Location, Scene, SceneCharacter, Timeline,
    WorldRule,
};

/// A scene with only id and title set.
pub fn scene(id: &str, title: &str) -> Scene {
    Scene {
        id: id.to_string(),
        index: None,
        title: title.to_string(),
        summary: None,
        purpose: None,
        tone: None,
        location: None,
        characters: vec![],
    }
}

/// A scene with summary, location and present characters.
pub fn full_scene(id: &str, title: &str, summary: &str, present: &[&str]) -> Scene {
    Scene {
        summary: Some(summary.to_string()),
        purpose: Some("Raise the stakes".to_string()),
        tone: Some("tense".to_string()),
        location: Some(Location {
            id: "loc_1".to_string(),
            name: "Harbor Tower".to_string(),
            description: None,
        }),
        characters: present
            .iter()
            .map(|name| SceneCharacter {
                character_id: Some(format!("chr_{}", name.to_lowercase())),
                character: Some(CharacterRef {
                    id: format!("chr_{}", name.to_lowercase()),
                    name: name.to_string(),
                }),
            })
            .collect(),
        ..scene(id, title)
    }
}

pub fn timeline_of(scenes: &[Scene]) -> Timeline {
    Timeline::new(scenes.to_vec())
}

/// Canon where Mara holds a secret and one world rule exists.
pub fn canon_with_secret() -> Canon {
    Canon {
        characters: vec![
            Character {
                id: "chr_mara".to_string(),
                name: "Mara".to_string(),
                bio: None,
                archetype: None,
                facts: vec![
                    CharacterFact {
                        label: "vault code".to_string(),
                        value: "7741".to_string(),
                        is_secret: true,
                        known_by_ids: vec![],
                    },
                    CharacterFact {
                        label: "home town".to_string(),
                        value: "Kessel".to_string(),
                        is_secret: false,
                        known_by_ids: vec![],
                    },
                ],
            },
            Character {
                id: "chr_jonah".to_string(),
                name: "Jonah".to_string(),
                bio: Some("Dock worker".to_string()),
                archetype: None,
                facts: vec![],
            },
        ],
        locations: vec![],
        world_rules: vec![WorldRule {
            title: "No magic".to_string(),
            description: Some("Magic does not exist in this world.".to_string()),
            category: None,
        }],
    }
}
