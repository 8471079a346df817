//! Language model client for AgentOS.
//!
//! Talks to any provider that speaks the OpenAI chat-completions protocol
//! (OpenRouter by default) and implements [`agentos_interface::ModelDriver`].
//!
//! # Example
//!
//! ```no_run
//! use agentos_core::{GenerateRequest, Message};
//! use agentos_interface::ModelDriver;
//! use agentos_models::{ChatCompletionClient, ModelConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ChatCompletionClient::new(ModelConfig::new("sk-or-..."))?;
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Say hello")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod wire;

pub use client::ChatCompletionClient;
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS, ModelConfig,
};
pub use wire::{
    ApiErrorBody, ApiErrorDetail, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    Choice, ChoiceMessage,
};
