//! The bundle of host data a capability analyzes.

use crate::{Canon, Scene, Timeline};

/// Scene, canon and timeline fetched once per analysis request.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct NarrativeContext {
    /// Scene under analysis
    scene: Scene,
    /// Project canon
    canon: Canon,
    /// All project scenes in story order
    timeline: Timeline,
}

impl NarrativeContext {
    /// Bundle fetched host data.
    pub fn new(scene: Scene, canon: Canon, timeline: Timeline) -> Self {
        Self {
            scene,
            canon,
            timeline,
        }
    }

    /// Timeline entries strictly before the scene under analysis.
    pub fn prior_scenes(&self) -> &[Scene] {
        self.timeline.preceding(&self.scene.id)
    }
}
