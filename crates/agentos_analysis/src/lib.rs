//! Scene analysis pipeline for AgentOS.
//!
//! A request flows through four pieces:
//!
//! 1. [`serialize_context`] turns scene, canon and timeline into one bounded prompt section.
//! 2. [`invoke_model`] sends a fixed persona plus that section to a [`ModelDriver`](agentos_interface::ModelDriver).
//! 3. [`reconcile`] recovers structured [`Finding`](agentos_core::Finding)s from the raw reply.
//! 4. [`SceneAnalyzer`] fetches context once per request, dispatches the requested
//!    capabilities through a [`CapabilityRegistry`] and always releases the host session.
//!
//! Only continuity checking is implemented; the other capabilities are
//! registered as pending and contribute no findings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod continuity;
mod invoke;
mod orchestrator;
mod pending;
mod prompt;
mod reconcile;
mod registry;
mod retry;

pub use continuity::{CONTINUITY_SYSTEM_PROMPT, ContinuityCapability};
pub use invoke::{ANALYSIS_TEMPERATURE, invoke_model};
pub use orchestrator::SceneAnalyzer;
pub use pending::PendingCapability;
pub use prompt::{FIELD_LIMIT, PLACEHOLDER, TIMELINE_SUMMARY_LIMIT, serialize_context};
pub use reconcile::{FALLBACK_TITLE, PARSE_FAILURE_TITLE, RAW_EXCERPT_LIMIT, reconcile};
pub use registry::{CapabilityInfo, CapabilityRegistry};
pub use retry::RetryPolicy;
