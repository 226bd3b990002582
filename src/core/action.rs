//! # Actions
//!
//! Everything that can happen in Charla becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Server answers? That's `Action::ReplyReceived` or `Action::ExchangeFailed`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the shell must
//! perform. No side effects here — network calls happen in the TUI layer.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Concurrent exchanges are deliberately left unordered: each in-flight
//! request resolves into its own action, and replies append in arrival
//! order, not submission order.

use log::info;

use crate::chat::{ChatMessage, ServiceError};
use crate::core::state::App;

/// Shown when the server answered but the payload carried no reply.
pub const PROCESSING_ERROR_FALLBACK: &str = "there was an error processing your message";

/// Shown when the exchange failed at the transport level.
pub const CONNECTION_ERROR_FALLBACK: &str = "error connecting to the server";

#[derive(Debug)]
pub enum Action {
    /// User submitted the input buffer (raw, untrimmed).
    Submit(String),
    /// An exchange resolved with a reply.
    ReplyReceived(String),
    /// An exchange resolved with an error.
    ExchangeFailed(ServiceError),
    /// User asked to leave.
    Quit,
}

impl Action {
    /// Maps the outcome of a [`crate::chat::ChatService::send`] call to the
    /// action that resumes the round trip.
    pub fn from_exchange(result: Result<String, ServiceError>) -> Self {
        match result {
            Ok(reply) => Action::ReplyReceived(reply),
            Err(e) => Action::ExchangeFailed(e),
        }
    }
}

/// I/O the shell must perform after an `update()`.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue exactly one request to the chat service with this text.
    SpawnExchange(String),
    Quit,
}

/// The reducer: applies an action to the state and says what I/O to do next.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            // Blank input: no message, no request, no status change.
            if text.trim().is_empty() {
                return Effect::None;
            }
            // The raw text is what the user sees and what the server gets;
            // trimming is only used for the blank check.
            app.transcript.push(ChatMessage::user(text.clone()));
            app.pending_exchanges += 1;
            app.status_message = String::from("Waiting for reply…");
            Effect::SpawnExchange(text)
        }
        Action::ReplyReceived(reply) => {
            app.transcript.push(ChatMessage::assistant(reply));
            finish_exchange(app);
            Effect::None
        }
        Action::ExchangeFailed(e) => {
            // Only the fixed fallback reaches the transcript; the detail has
            // already been logged by the spawning task.
            let fallback = if e.is_incomplete_reply() {
                PROCESSING_ERROR_FALLBACK
            } else {
                CONNECTION_ERROR_FALLBACK
            };
            app.transcript.push(ChatMessage::assistant(fallback));
            finish_exchange(app);
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

fn finish_exchange(app: &mut App) {
    app.pending_exchanges = app.pending_exchanges.saturating_sub(1);
    app.status_message = if app.pending_exchanges > 0 {
        String::from("Waiting for reply…")
    } else {
        String::from("Type a message and press Enter")
    };
}
