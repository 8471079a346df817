//! The ordered list of all scenes in a project.

use crate::Scene;
use serde::{Deserialize, Serialize};

/// All scenes of a project in canonical story order.
///
/// The host returns scenes ordered by act, sequence and scene index; this type
/// keeps that order and answers which scenes come strictly before a given one.
///
/// # Examples
///
/// ```
/// use agentos_core::{Scene, Timeline};
///
/// let scene = |id: &str| Scene {
///     id: id.to_string(),
///     index: None,
///     title: id.to_uppercase(),
///     summary: None,
///     purpose: None,
///     tone: None,
///     location: None,
///     characters: vec![],
/// };
/// let timeline = Timeline::new(vec![scene("a"), scene("b"), scene("c")]);
///
/// let before: Vec<_> = timeline.preceding("c").iter().map(|s| s.id.as_str()).collect();
/// assert_eq!(before, vec!["a", "b"]);
/// assert!(timeline.preceding("a").is_empty());
/// assert!(timeline.preceding("missing").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timeline {
    scenes: Vec<Scene>,
}

impl Timeline {
    /// Wrap an already ordered scene list.
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }

    /// All scenes in story order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Position of a scene in story order.
    pub fn position(&self, scene_id: &str) -> Option<usize> {
        self.scenes.iter().position(|s| s.id == scene_id)
    }

    /// Scenes strictly before `scene_id`.
    ///
    /// Returns an empty slice when the scene is not part of the timeline, so
    /// that no scene of unknown position can leak into a prompt.
    pub fn preceding(&self, scene_id: &str) -> &[Scene] {
        match self.position(scene_id) {
            Some(k) => &self.scenes[..k],
            None => &[],
        }
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the project has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl From<Vec<Scene>> for Timeline {
    fn from(scenes: Vec<Scene>) -> Self {
        Self::new(scenes)
    }
}
