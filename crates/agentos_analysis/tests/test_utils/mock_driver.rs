//! Mock model driver.

use agentos_core::{GenerateRequest, GenerateResponse};
use agentos_error::{AgentosResult, ModelError, ModelErrorKind};
use agentos_interface::ModelDriver;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given text
    Success(String),
    /// Always return the specified error
    Error(ModelErrorKind),
    /// Fail N times with the error, then return the text
    FailThenSucceed {
        fail_count: usize,
        error: ModelErrorKind,
        success_text: String,
    },
}

/// Mock driver that records every request it receives.
#[derive(Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    pub fn new_error(error: ModelErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    pub fn new_fail_then_succeed(
        fail_count: usize,
        error: ModelErrorKind,
        success_text: impl Into<String>,
    ) -> Self {
        Self::new_with_behavior(MockBehavior::FailThenSucceed {
            fail_count,
            error,
            success_text: success_text.into(),
        })
    }

    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of generate() calls so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// User message of the most recent request.
    pub fn last_user_message(&self) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .and_then(|r| r.messages().last().map(|m| m.content().clone()))
    }
}

#[async_trait]
impl ModelDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> AgentosResult<GenerateResponse> {
        let attempt = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::new(text.clone())),
            MockBehavior::Error(kind) => Err(ModelError::new(kind.clone()).into()),
            MockBehavior::FailThenSucceed {
                fail_count,
                error,
                success_text,
            } => {
                if attempt < *fail_count {
                    Err(ModelError::new(error.clone()).into())
                } else {
                    Ok(GenerateResponse::new(success_text.clone()))
                }
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
