//! Top-level error wrapper types.

use crate::{ConfigError, HostError, ModelError, ServerError};

/// Every failure the service can surface, by origin.
///
/// # Examples
///
/// ```
/// use agentos_error::{AgentosError, AgentosErrorKind, ModelError, ModelErrorKind};
///
/// let err: AgentosError = ModelError::new(ModelErrorKind::EmptyResponse).into();
/// assert!(matches!(err.kind(), AgentosErrorKind::Model(_)));
/// assert!(format!("{}", err).contains("no choices"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AgentosErrorKind {
    /// Host context provider error
    #[from(HostError)]
    Host(HostError),
    /// Model provider error
    #[from(ModelError)]
    Model(ModelError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// HTTP surface error
    #[from(ServerError)]
    Server(ServerError),
}

/// AgentOS error with kind discrimination.
///
/// # Examples
///
/// ```
/// use agentos_error::{AgentosResult, ConfigError};
///
/// fn might_fail() -> AgentosResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("AgentOS Error: {}", _0)]
pub struct AgentosError(Box<AgentosErrorKind>);

impl AgentosError {
    /// Create a new error from a kind.
    pub fn new(kind: AgentosErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AgentosErrorKind {
        &self.0
    }

    /// Whether retrying the same operation may succeed.
    pub fn is_retryable(&self) -> bool {
        match self.kind() {
            AgentosErrorKind::Model(e) => e.is_retryable(),
            _ => false,
        }
    }
}

// Generic From implementation for any type that converts to AgentosErrorKind
impl<T> From<T> for AgentosError
where
    T: Into<AgentosErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for AgentOS operations.
pub type AgentosResult<T> = std::result::Result<T, AgentosError>;
