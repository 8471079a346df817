//! HTTP side-car exposing AgentOS scene analysis.
//!
//! Routes:
//! - `GET /health`
//! - `POST /agents/scene-analysis`
//! - `POST /agents/shot-suggestions`
//!
//! The `agentos-server` binary loads [`AppConfig`], initializes logging,
//! builds [`AppState`] and runs [`serve`] until interrupted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod routes;
mod state;
mod telemetry;

pub use config::{AppConfig, ConfigFile, HostSettings, ModelSettings, ServerSettings};
pub use error::ApiError;
pub use routes::{router, serve};
pub use state::AppState;
pub use telemetry::{LogFormat, init_logging, shutdown_telemetry};
