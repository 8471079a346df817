use crate::{
    ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ModelConfig,
};
use agentos_core::{GenerateRequest, GenerateResponse};
use agentos_error::{AgentosResult, ModelError, ModelErrorKind};
use agentos_interface::ModelDriver;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::instrument;

/// Client for an OpenAI-compatible chat completion endpoint.
///
/// Every request carries the configured timeout; dropping the returned future
/// aborts the call. Errors are reported as they happened, without retries.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    config: ModelConfig,
    client: reqwest::Client,
}

impl ChatCompletionClient {
    /// Create a client, validating the configuration.
    #[instrument(skip(config), fields(base_url = %config.base_url, model = %config.model))]
    pub fn new(config: ModelConfig) -> Result<Self, ModelError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ModelError::new(ModelErrorKind::Configuration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        tracing::debug!("Created chat completion client");
        Ok(Self { config, client })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn to_wire(&self, req: &GenerateRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: req
                .model()
                .clone()
                .unwrap_or_else(|| self.config.model.clone()),
            messages: req
                .messages()
                .iter()
                .map(|m| ChatMessage {
                    role: m.role().as_str().to_string(),
                    content: m.content().clone(),
                })
                .collect(),
            temperature: req.temperature().or(Some(self.config.temperature)),
            max_tokens: req.max_tokens().or(self.config.max_tokens),
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> ModelError {
        if e.is_timeout() {
            tracing::warn!(timeout_secs = self.config.timeout_secs, "Model request timed out");
            ModelError::new(ModelErrorKind::Timeout(self.config.timeout_secs))
        } else {
            tracing::error!(error = %e, "Model request failed");
            ModelError::new(ModelErrorKind::Http(e.to_string()))
        }
    }

    /// Send one chat completion request and decode the response.
    #[instrument(skip(self, request), fields(model = %request.model, messages = request.messages.len()))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ModelError> {
        let url = self.config.completions_url();
        tracing::debug!(url = %url, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::error!(status = status.as_u16(), message = %message, "Provider returned error");
            return Err(if status == StatusCode::TOO_MANY_REQUESTS {
                ModelError::new(ModelErrorKind::RateLimited(message))
            } else {
                ModelError::new(ModelErrorKind::Api {
                    status: status.as_u16(),
                    message,
                })
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse completion response");
            ModelError::new(ModelErrorKind::Deserialization(e.to_string()))
        })
    }
}

/// Prefer the provider's `{"error": {"message": ..}}` text over the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl ModelDriver for ChatCompletionClient {
    #[instrument(skip(self, req), fields(provider = self.provider_name(), model = %self.config.model))]
    async fn generate(&self, req: &GenerateRequest) -> AgentosResult<GenerateResponse> {
        let wire = self.to_wire(req);
        let response = self.chat_completion(&wire).await?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            tracing::error!("Provider returned no choices");
            ModelError::new(ModelErrorKind::EmptyResponse)
        })?;

        let text = choice.message.content.unwrap_or_default();
        tracing::debug!(chars = text.len(), finish_reason = ?choice.finish_reason, "Completion received");
        Ok(GenerateResponse::new(text))
    }

    fn provider_name(&self) -> &'static str {
        "openai_compat"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
