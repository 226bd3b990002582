//! Domain and wire types for the chat exchange.
//!
//! `ChatMessage`/`Sender` are the transcript's domain types; `ChatRequest`
//! and `ChatReply` mirror the server's JSON bodies and exist only at the
//! HTTP boundary.

use serde::{Deserialize, Serialize};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Short label used as the message block title.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// One entry in the transcript.
///
/// Messages have no identity beyond their position in the transcript and
/// are never persisted. Insertion order is the only ordering guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    /// Build a message. Callers are responsible for never passing blank
    /// text; the reducer rejects blank input before a message is created.
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        let text = text.into();
        debug_assert!(!text.trim().is_empty(), "transcript entries must be non-blank");
        Self { text, sender }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Assistant)
    }
}

/// Request body for `POST /chat`: a single field with the raw user text.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply body from the server.
///
/// The server signals success with a `response` string and errors with
/// other fields we don't inspect, so everything is optional here and the
/// caller decides what a missing `response` means.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub response: Option<String>,
}
