use agentos_core::{GenerateRequest, Message};
use agentos_error::{AgentosResult, ModelError, ModelErrorKind};
use agentos_interface::ModelDriver;
use tracing::instrument;

/// Sampling temperature for every analysis call.
///
/// Overrides whatever default the driver is configured with.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// Send a fixed system persona plus serialized context and return the raw reply.
///
/// Sampling is pinned to [`ANALYSIS_TEMPERATURE`]. Errors propagate
/// unchanged; retries belong to the caller.
#[instrument(skip_all, fields(provider = driver.provider_name(), model = driver.model_name(), context_chars = user.len()))]
pub async fn invoke_model(driver: &dyn ModelDriver, system: &str, user: &str) -> AgentosResult<String> {
    let request = GenerateRequest::builder()
        .messages(vec![Message::system(system), Message::user(user)])
        .temperature(Some(ANALYSIS_TEMPERATURE))
        .build()
        .map_err(|e| ModelError::new(ModelErrorKind::Builder(e.to_string())))?;

    let response = driver.generate(&request).await?;
    tracing::debug!(reply_chars = response.text().len(), "Model replied");
    Ok(response.into_text())
}
