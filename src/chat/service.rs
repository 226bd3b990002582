use std::fmt;

use async_trait::async_trait;

/// Errors that can occur during a chat exchange.
/// The variant determines which fallback message the user sees.
#[derive(Debug)]
pub enum ServiceError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body wasn't valid JSON.
    Parse(String),
    /// Transport succeeded but the payload had no usable reply field.
    IncompleteReply,
}

impl ServiceError {
    /// True when the exchange reached the server and came back well-formed,
    /// just without a reply. Everything else counts as a connection failure.
    pub fn is_incomplete_reply(&self) -> bool {
        matches!(self, ServiceError::IncompleteReply)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Network(msg) => write!(f, "network error: {msg}"),
            ServiceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ServiceError::Parse(msg) => write!(f, "parse error: {msg}"),
            ServiceError::IncompleteReply => write!(f, "reply missing response field"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// The outbound boundary: one message in, one reply out.
///
/// Implementations perform exactly one request per call and never retry.
/// The trait exists so the core logic and the TUI can be exercised against
/// a fake service in tests.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Returns the name of the service (for logging).
    fn name(&self) -> &str;

    /// Sends one message and resolves to the reply text.
    async fn send(&self, message: &str) -> Result<String, ServiceError>;
}
