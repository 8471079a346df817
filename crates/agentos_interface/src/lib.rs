//! Trait seams for the AgentOS scene analysis service.
//!
//! The analysis pipeline only talks to its collaborators through these traits:
//! [`ModelDriver`] for the language model, [`ContextSource`] and
//! [`ContextSession`] for the host application, and [`Capability`] for the
//! individual kinds of scene analysis.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capability;
mod context;
mod driver;

pub use capability::Capability;
pub use context::{ContextSession, ContextSource};
pub use driver::ModelDriver;
