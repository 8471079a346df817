//! Error types for the AgentOS scene analysis service.
//!
//! This crate provides the foundation error types used throughout the AgentOS workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use agentos_error::{AgentosResult, HostError, HostErrorKind};
//!
//! fn fetch_scene() -> AgentosResult<String> {
//!     Err(HostError::new(HostErrorKind::Transport("connection refused".into())))?
//! }
//!
//! match fetch_scene() {
//!     Ok(scene) => println!("Got: {}", scene),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod host;
mod model;
mod server;

pub use config::ConfigError;
pub use error::{AgentosError, AgentosErrorKind, AgentosResult};
pub use host::{HostError, HostErrorKind};
pub use model::{ModelError, ModelErrorKind};
pub use server::{ServerError, ServerErrorKind};
