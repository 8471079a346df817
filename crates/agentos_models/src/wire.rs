//! OpenAI-compatible chat-completion payloads.
//!
//! Only the fields this service reads are decoded; providers add plenty more.

use serde::{Deserialize, Serialize};

/// Chat completion request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// One message on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChatMessage {
    /// `system`, `user` or `assistant`
    pub role: String,
    /// Message text
    pub content: String,
}

/// Chat completion response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatCompletionResponse {
    /// Model that actually served the request
    #[serde(default)]
    pub model: Option<String>,
    /// Generated completions
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Choice {
    /// The generated message
    pub message: ChoiceMessage,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message inside a choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChoiceMessage {
    /// Generated text; some providers send `null`
    #[serde(default)]
    pub content: Option<String>,
}

/// Error envelope many providers return with non-success statuses.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Error detail
    pub error: ApiErrorDetail,
}

/// Error detail.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiErrorDetail {
    /// Human-readable message
    pub message: String,
}
