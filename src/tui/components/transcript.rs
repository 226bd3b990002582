//! # Transcript Component
//!
//! Scrollable, append-only view of the conversation.
//!
//! ## Responsibilities
//!
//! - Display the message log in append order
//! - Keep the view pinned to the newest message (stick-to-bottom)
//! - Manage manual scrolling (unpin on scroll up, re-pin at the end)
//! - Cache message heights so the scroll canvas can be sized cheaply
//!
//! ## Architecture
//!
//! `Transcript` is a transient component (created each frame) that wraps
//! `&mut TranscriptState` (persistent state) and the message slice (props).
//! Since `Component::render` takes `&mut self`, the layout cache and scroll
//! state can be updated during the render pass, aligning with Ratatui's
//! `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::chat::ChatMessage;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::Message;
use crate::tui::event::TuiEvent;

/// Layout and scroll state for the transcript.
/// Must be persisted in the parent TuiState.
pub struct TranscriptState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached per-message heights
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        let total: u16 = self.layout.heights.iter().sum();
        total.saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last message.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the
    /// bottom. Called on scroll-down events so that scrolling past the end
    /// re-pins to bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// EventHandler is implemented on `TranscriptState` rather than `Transcript`
/// because event handling needs the persistent scroll state, while
/// `Transcript` is recreated each frame with fresh props.
impl EventHandler for TranscriptState {
    type Event = (); // Scrolling is handled internally, nothing to emit

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
                self.scroll_state.scroll_to_bottom();
                None
            }
            _ => None,
        }
    }
}

/// Cached layout measurements.
///
/// The transcript is append-only and messages are immutable, so cached
/// heights stay valid until the content width changes; only the new tail
/// needs measuring each frame.
pub struct LayoutCache {
    pub heights: Vec<u16>,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            content_width: 0,
        }
    }

    /// Bring the height cache up to date for the given messages and width.
    fn update(&mut self, messages: &[ChatMessage], content_width: u16) {
        if self.content_width != content_width {
            self.heights.clear();
            self.content_width = content_width;
        }
        for entry in messages.iter().skip(self.heights.len()) {
            self.heights.push(Message::calculate_height(entry, content_width));
        }
        self.heights.truncate(messages.len());
    }
}

/// Transient view over the transcript, built fresh each frame.
pub struct Transcript<'a> {
    pub messages: &'a [ChatMessage],
    pub state: &'a mut TranscriptState,
}

impl<'a> Transcript<'a> {
    pub fn new(messages: &'a [ChatMessage], state: &'a mut TranscriptState) -> Self {
        Self { messages, state }
    }
}

impl<'a> Component for Transcript<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column is reserved for the vertical scrollbar
        let content_width = area.width.saturating_sub(1);

        // 1. Update the layout cache (internal mutation)
        self.state.layout.update(self.messages, content_width);
        let total_height: u16 = self.state.layout.heights.iter().sum();

        // 2. Clamp scroll offset to prevent overscrolling past content.
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let scroll_offset = if self.state.stick_to_bottom {
            self.state.max_scroll()
        } else {
            self.state.scroll_state.offset().y
        };

        // 3. Render messages into a ScrollView, skipping anything that falls
        // entirely outside the viewport.
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (entry, &height) in self.messages.iter().zip(&self.state.layout.heights) {
            let visible = y_offset + height > scroll_offset
                && y_offset < scroll_offset.saturating_add(area.height);
            if visible {
                let rect = Rect::new(0, y_offset, content_width, height);
                scroll_view.render_widget(Message::new(entry), rect);
            }
            y_offset += height;
        }

        // Auto-scroll (mutation): while pinned, every render lands at the
        // maximum scrollable extent so the newest message is revealed.
        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
