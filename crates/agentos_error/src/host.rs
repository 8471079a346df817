//! Errors raised while talking to the host application's internal API.

/// Host context provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HostErrorKind {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[display("Host request failed: {}", _0)]
    Transport(String),

    /// The host answered with a non-success status.
    #[display("Host returned {} for {}", status, endpoint)]
    Status {
        /// Path that was requested
        endpoint: String,
        /// HTTP status code
        status: u16,
    },

    /// The host answered with a body that does not match the expected shape.
    #[display("Failed to decode host response from {}: {}", endpoint, message)]
    Deserialization {
        /// Path that was requested
        endpoint: String,
        /// Decoder message
        message: String,
    },

    /// The per-request session was used after it was closed.
    #[display("Host session already closed")]
    SessionClosed,

    /// Invalid client configuration.
    #[display("Invalid host client configuration: {}", _0)]
    Configuration(String),
}

impl HostErrorKind {
    /// HTTP status reported by the host, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Host error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Host Error: {} at line {} in {}", kind, line, file)]
pub struct HostError {
    /// The error kind
    pub kind: HostErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl HostError {
    /// Create a new HostError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: HostErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
