//! Mapping of pipeline failures to HTTP responses.

use agentos_error::{AgentosError, AgentosErrorKind, ModelErrorKind, ServerErrorKind};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Error returned by route handlers.
///
/// Renders as `{"error": <message>, "kind": <category>}`.
#[derive(Debug, derive_more::From)]
pub struct ApiError(AgentosError);

impl ApiError {
    /// Status code and category for the wrapped error.
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self.0.kind() {
            AgentosErrorKind::Host(_) => (StatusCode::BAD_GATEWAY, "host"),
            AgentosErrorKind::Model(e) if matches!(e.kind, ModelErrorKind::Timeout(_)) => {
                (StatusCode::GATEWAY_TIMEOUT, "model_timeout")
            }
            AgentosErrorKind::Model(_) => (StatusCode::BAD_GATEWAY, "model"),
            AgentosErrorKind::Server(e) if matches!(e.kind, ServerErrorKind::InvalidRequest(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_request")
            }
            AgentosErrorKind::Config(_) | AgentosErrorKind::Server(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        }
    }

    /// Client-facing message without source locations.
    pub fn message(&self) -> String {
        match self.0.kind() {
            AgentosErrorKind::Host(e) => e.kind.to_string(),
            AgentosErrorKind::Model(e) => e.kind.to_string(),
            AgentosErrorKind::Config(e) => e.message.clone(),
            AgentosErrorKind::Server(e) => e.kind.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.classify();
        if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), kind, error = %self.0, "Request rejected");
        } else {
            tracing::error!(status = status.as_u16(), kind, error = %self.0, "Request failed");
        }
        (status, Json(json!({"error": self.message(), "kind": kind}))).into_response()
    }
}
