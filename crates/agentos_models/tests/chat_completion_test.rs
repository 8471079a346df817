//! Tests for the chat completion client against a mock provider.

use agentos_core::{GenerateRequest, Message};
use agentos_error::{AgentosErrorKind, ModelErrorKind};
use agentos_interface::ModelDriver;
use agentos_models::{ChatCompletionClient, ModelConfig};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> anyhow::Result<ChatCompletionClient> {
    let config = ModelConfig::new("test-key")
        .with_base_url(format!("{}/api/v1", server.uri()))
        .with_model("test/model")
        .with_timeout_secs(1);
    Ok(ChatCompletionClient::new(config)?)
}

fn request() -> anyhow::Result<GenerateRequest> {
    Ok(GenerateRequest::builder()
        .messages(vec![
            Message::system("You are a continuity supervisor."),
            Message::user("## Current Scene"),
        ])
        .build()?)
}

fn model_error(err: &agentos_error::AgentosError) -> Option<&ModelErrorKind> {
    match err.kind() {
        AgentosErrorKind::Model(e) => Some(&e.kind),
        _ => None,
    }
}

#[tokio::test]
async fn sends_bearer_auth_and_default_sampling() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test/model",
            "temperature": 0.3,
            "messages": [
                {"role": "system", "content": "You are a continuity supervisor."},
                {"role": "user", "content": "## Current Scene"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gen-1",
            "model": "test/model",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "[]"}, "finish_reason": "stop"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let response = client.generate(&request()?).await?;

    assert_eq!(response.text(), "[]");
    assert_eq!(client.model_name(), "test/model");
    Ok(())
}

#[tokio::test]
async fn request_overrides_take_precedence() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"model": "other/model", "max_tokens": 256})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "ok"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let req = GenerateRequest::builder()
        .messages(vec![Message::user("hi")])
        .model(Some("other/model".to_string()))
        .max_tokens(Some(256))
        .build()?;
    let response = client_for(&server)?.generate(&req).await?;
    assert_eq!(response.text(), "ok");
    Ok(())
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"error": {"message": "slow down"}})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)?
        .generate(&request()?)
        .await
        .expect_err("429 must fail");

    assert_eq!(
        model_error(&err),
        Some(&ModelErrorKind::RateLimited("slow down".into()))
    );
    assert!(err.is_retryable());
    Ok(())
}

#[tokio::test]
async fn server_errors_are_retryable_client_errors_are_not() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"model": "test/model"})))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = client_for(&server)?
        .generate(&request()?)
        .await
        .expect_err("503 must fail");
    assert_eq!(
        model_error(&err),
        Some(&ModelErrorKind::Api {
            status: 503,
            message: "overloaded".into()
        })
    );
    assert!(err.is_retryable());

    server.reset().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let err = client_for(&server)?
        .generate(&request()?)
        .await
        .expect_err("401 must fail");
    assert!(matches!(
        model_error(&err),
        Some(ModelErrorKind::Api { status: 401, .. })
    ));
    assert!(!err.is_retryable());
    Ok(())
}

#[tokio::test]
async fn slow_provider_times_out() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_json(json!({"choices": [{"message": {"content": "[]"}}]})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)?
        .generate(&request()?)
        .await
        .expect_err("delay exceeds timeout");

    assert_eq!(model_error(&err), Some(&ModelErrorKind::Timeout(1)));
    Ok(())
}

#[tokio::test]
async fn missing_choices_is_empty_response() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)?
        .generate(&request()?)
        .await
        .expect_err("no choices");
    assert_eq!(model_error(&err), Some(&ModelErrorKind::EmptyResponse));
    assert!(!err.is_retryable());
    Ok(())
}

#[tokio::test]
async fn null_content_becomes_empty_text() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)?.generate(&request()?).await?;
    assert_eq!(response.text(), "");
    Ok(())
}

#[tokio::test]
async fn undecodable_body_is_deserialization_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)?
        .generate(&request()?)
        .await
        .expect_err("html body");
    assert!(matches!(
        model_error(&err),
        Some(ModelErrorKind::Deserialization(_))
    ));
    Ok(())
}

#[test]
fn construction_rejects_missing_credential() {
    assert!(ChatCompletionClient::new(ModelConfig::new("")).is_err());
}
