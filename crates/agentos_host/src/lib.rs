//! Client for the story host application's internal API.
//!
//! The host owns all durable story data. This crate fetches a scene, the
//! project canon and the project's scene list over three read-only endpoints,
//! authenticating with a shared secret in the `X-AgentOS-Key` header.
//!
//! Each analysis request opens its own [`HostSession`] through
//! [`HostContextSource`] and closes it when done.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod session;

pub use config::{AGENTOS_KEY_HEADER, DEFAULT_HOST_URL, DEFAULT_HOST_TIMEOUT_SECS, HostConfig};
pub use session::{HostContextSource, HostSession};
