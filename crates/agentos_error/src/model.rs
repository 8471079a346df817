//! Model provider errors and retry classification.

/// Model provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelErrorKind {
    /// HTTP request failed before a response arrived
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// The request exceeded the configured timeout
    #[display("Request timed out after {}s", _0)]
    Timeout(u64),

    /// Provider rejected the request because of rate limiting
    #[display("Rate limited by provider: {}", _0)]
    RateLimited(String),

    /// Provider returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Response body could not be decoded
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// Response carried no completion choices
    #[display("Provider returned no choices")]
    EmptyResponse,

    /// Invalid client configuration
    #[display("Invalid model client configuration: {}", _0)]
    Configuration(String),

    /// Request could not be assembled
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl ModelErrorKind {
    /// Check if this error type should be retried.
    ///
    /// # Examples
    ///
    /// ```
    /// use agentos_error::ModelErrorKind;
    ///
    /// assert!(ModelErrorKind::Timeout(60).is_retryable());
    /// assert!(!ModelErrorKind::Api { status: 401, message: "bad key".into() }.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout(_) | Self::RateLimited(_) => true,
            Self::Api { status, .. } => matches!(*status, 408 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at {}:{}", kind, file, line)]
pub struct ModelError {
    /// The specific error kind
    pub kind: ModelErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelError {
    /// Create a new model error.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Check if the underlying kind should be retried.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
