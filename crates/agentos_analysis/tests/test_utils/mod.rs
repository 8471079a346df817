//! Test utilities for analysis tests.
//!
//! Mock model drivers and host context sources, plus story fixtures.

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_driver;
pub mod mock_host;

#[allow(unused_imports)]
pub use fixtures::{canon_with_secret, full_scene, scene, timeline_of};
#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver};
#[allow(unused_imports)]
pub use mock_host::{MockContextSource, SessionLog};
