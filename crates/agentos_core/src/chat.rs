//! Chat request and response types for the model provider.

use serde::{Deserialize, Serialize};

/// Roles of conversation participants.
///
/// # Examples
///
/// ```
/// use agentos_core::Role;
///
/// assert_eq!(Role::System.as_str(), "system");
/// assert_eq!(format!("{}", Role::User), "user");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions and persona
    #[display("system")]
    System,
    /// Content supplied by the caller
    #[display("user")]
    User,
    /// Model output
    #[display("assistant")]
    Assistant,
}

impl Role {
    /// Lowercase role name used by chat-completion APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single text message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// Message text
    content: String,
}

impl Message {
    /// Create a new message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// Provider-neutral generation request.
///
/// # Examples
///
/// ```
/// use agentos_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::system("Be terse."), Message::user("Hello")])
///     .temperature(Some(0.3))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.max_tokens(), None);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Model identifier override
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Raw text returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Concatenated completion text
    text: String,
}

impl GenerateResponse {
    /// Wrap completion text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Consume the response and return its text.
    pub fn into_text(self) -> String {
        self.text
    }
}
