//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps on `event::poll` (with
//! a shorter timeout while exchanges are in flight so replies show up
//! promptly) and only draws when an event or a background action arrived.
//!
//! ## Exchange lifecycle
//!
//! Submitting spawns one tokio task per exchange; each task resolves
//! independently and reports back over an mpsc channel drained by the loop.
//! Nothing serializes overlapping exchanges — replies append in arrival
//! order, whatever that turns out to be.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use log::{debug, error, info, warn};

use crate::chat::{ChatService, HttpChatService};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TranscriptState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub transcript: TranscriptState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            transcript: TranscriptState::new(),
            input_box: InputBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // SteadyBlock: set_cursor_position resets the terminal's blink timer
        // on every draw, which makes a blinking cursor look erratic.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service: Arc<dyn ChatService> = Arc::new(HttpChatService::new(config.server_url.clone()));
    let mut app = App::new(service, config.server_url);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background exchange tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Poll faster while replies are pending so they appear promptly
        let timeout = if app.pending_exchanges > 0 {
            std::time::Duration::from_millis(100)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            if matches!(event, TuiEvent::Quit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Scroll events always go to the transcript
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
                    | TuiEvent::ScrollToBottom
            ) {
                tui.transcript.handle_event(&event);
                continue;
            }

            // InputBox handles everything else
            if let Some(input_event) = tui.input_box.handle_event(&event) {
                match input_event {
                    InputEvent::Submit(text) => {
                        if let Effect::SpawnExchange(text) = update(&mut app, Action::Submit(text))
                        {
                            spawn_exchange(app.service.clone(), text, tx.clone());
                        }
                    }
                    InputEvent::ContentChanged => {}
                }
            }
        }

        // Handle background exchange outcomes
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Fire one request and report its eventual outcome back to the event loop.
///
/// The task owns its exchange end to end; overlapping calls resolve
/// independently. Failure detail is logged here — only the fixed fallback
/// text ever reaches the transcript.
fn spawn_exchange(service: Arc<dyn ChatService>, text: String, tx: mpsc::Sender<Action>) {
    info!("Spawning chat exchange via {}", service.name());
    tokio::spawn(async move {
        let result = service.send(&text).await;
        if let Err(ref e) = result {
            error!("Chat exchange failed: {}", e);
        }
        if tx.send(Action::from_exchange(result)).is_err() {
            warn!("Failed to send exchange outcome: receiver dropped");
        }
    });
}
