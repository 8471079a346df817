//! Mapping from capability tag to implementation.

use crate::{ContinuityCapability, PendingCapability, RetryPolicy};
use agentos_core::AgentType;
use agentos_interface::{Capability, ModelDriver};
use std::collections::HashMap;
use std::sync::Arc;

/// Information about a registered capability.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct CapabilityInfo {
    /// Tag the capability answers to
    agent_type: AgentType,
    /// Human-readable description
    description: String,
    /// Whether it produces findings
    implemented: bool,
}

/// Registry of analysis capabilities keyed by [`AgentType`].
pub struct CapabilityRegistry {
    capabilities: HashMap<AgentType, Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            capabilities: HashMap::new(),
        }
    }

    /// Registry with continuity checking backed by `driver` and every other
    /// tag registered as pending.
    pub fn with_defaults(driver: Arc<dyn ModelDriver>, retry: RetryPolicy) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ContinuityCapability::new(driver, retry)));
        registry.register(Arc::new(PendingCapability::story_structure()));
        registry.register(Arc::new(PendingCapability::character()));
        registry.register(Arc::new(PendingCapability::storyboard()));
        registry
    }

    /// Register a capability.
    ///
    /// A capability already registered under the same tag is replaced and a
    /// warning logged.
    #[tracing::instrument(skip(self, capability), fields(agent_type = %capability.agent_type()))]
    pub fn register(&mut self, capability: Arc<dyn Capability>) {
        let agent_type = capability.agent_type();

        if self.capabilities.contains_key(&agent_type) {
            tracing::warn!("Capability already registered, overwriting previous registration");
        } else {
            tracing::debug!(implemented = capability.is_implemented(), "Registering capability");
        }

        self.capabilities.insert(agent_type, capability);
    }

    /// Get a capability by tag.
    pub fn get(&self, agent_type: AgentType) -> Option<Arc<dyn Capability>> {
        self.capabilities.get(&agent_type).cloned()
    }

    /// Whether a tag maps to a capability that produces findings.
    pub fn is_implemented(&self, agent_type: AgentType) -> bool {
        self.capabilities
            .get(&agent_type)
            .is_some_and(|c| c.is_implemented())
    }

    /// Implemented capabilities for the requested tags.
    ///
    /// Keeps request order, drops repeated tags after their first occurrence
    /// and skips tags without a real implementation.
    pub fn resolve(&self, requested: &[AgentType]) -> Vec<Arc<dyn Capability>> {
        let mut seen = Vec::with_capacity(requested.len());
        let mut plan = Vec::new();
        for agent_type in requested {
            if seen.contains(agent_type) {
                continue;
            }
            seen.push(*agent_type);
            match self.get(*agent_type) {
                Some(capability) if capability.is_implemented() => plan.push(capability),
                _ => tracing::debug!(agent_type = %agent_type, "Skipping unimplemented capability"),
            }
        }
        plan
    }

    /// List all registered capabilities, sorted by tag.
    pub fn list(&self) -> Vec<CapabilityInfo> {
        let mut infos: Vec<_> = self
            .capabilities
            .values()
            .map(|c| CapabilityInfo {
                agent_type: c.agent_type(),
                description: c.description().to_string(),
                implemented: c.is_implemented(),
            })
            .collect();
        infos.sort_by_key(|info| info.agent_type);
        infos
    }

    /// Get number of registered capabilities.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
