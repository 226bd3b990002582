//! # Core Application Logic
//!
//! Charla's business logic. It knows nothing about any specific UI
//! technology and performs no I/O.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The TUI adapter feeds user input in as `Action`s, carries out the
//! returned `Effect`s (spawning network exchanges), and feeds the eventual
//! outcomes back in as more `Action`s. This keeps the whole request/display
//! cycle testable without a terminal or a server.
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings with a defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod state;
