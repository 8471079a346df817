//! Core data types for the AgentOS scene analysis service.
//!
//! This crate provides the foundation data types shared across the workspace:
//! the story entities fetched from the host application, the findings produced
//! by analysis capabilities, the inbound HTTP contract and the chat types sent
//! to the model provider.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod chat;
mod context;
mod contract;
mod finding;
mod story;
mod timeline;

pub use agent::AgentType;
pub use chat::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, Message, Role};
pub use context::NarrativeContext;
pub use contract::{
    AgentOutput, HealthResponse, SceneAnalysisRequest, SceneAnalysisResponse, ShotSuggestion,
    ShotSuggestionsRequest, ShotSuggestionsResponse,
};
pub use finding::{Finding, FindingBuilder, Severity};
pub use story::{Canon, Character, CharacterFact, CharacterRef, Location, Scene, SceneCharacter, WorldRule};
pub use timeline::Timeline;
