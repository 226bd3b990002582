//! # Application State
//!
//! Core business state for Charla. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn ChatService>   // remote chat endpoint
//! ├── transcript: Vec<ChatMessage>    // append-only message log
//! ├── status_message: String          // status bar text
//! ├── server_url: String              // where we're connected (display only)
//! └── pending_exchanges: usize        // requests currently in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::chat::{ChatMessage, ChatService};

pub struct App {
    pub service: Arc<dyn ChatService>,
    /// Append-only transcript. Display order equals append order; there is
    /// no dedup, truncation, or history limit.
    pub transcript: Vec<ChatMessage>,
    pub status_message: String,
    pub server_url: String,
    /// Number of exchanges currently awaiting a reply. Display only — it
    /// never gates further submissions.
    pub pending_exchanges: usize,
}

impl App {
    pub fn new(service: Arc<dyn ChatService>, server_url: String) -> Self {
        Self {
            service,
            transcript: Vec::new(),
            status_message: String::from("Type a message and press Enter"),
            server_url,
            pending_exchanges: 0,
        }
    }
}
