//! # InputBox Component
//!
//! Single-line text entry for composing messages.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Keep the cursor visible by scrolling long lines horizontally
//!
//! ## Submission contract
//!
//! Enter with a blank (empty or whitespace-only) buffer does nothing: no
//! event, no clear. Enter with content takes the buffer as-is — the raw,
//! untrimmed text — and resets the field, so the parent sees exactly what
//! the user typed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed on a non-blank buffer)
    Submit(String),
    /// Text content or cursor position changed
    ContentChanged,
}

/// Text input component.
///
/// # State
///
/// - `buffer`: current text being typed
/// - `cursor_pos`: byte offset of the cursor within `buffer`
/// - `h_scroll`: leftmost visible column when the line overflows the box
pub struct InputBox {
    pub buffer: String,
    cursor_pos: usize,
    h_scroll: u16,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor_pos: 0,
            h_scroll: 0,
        }
    }

    /// Display column of the cursor within the (unscrolled) line.
    fn cursor_column(&self) -> u16 {
        self.buffer[..self.cursor_pos].width() as u16
    }

    /// Adjust horizontal scroll so the cursor stays inside `content_width`.
    fn update_scroll(&mut self, content_width: u16) {
        if content_width == 0 {
            return;
        }
        let col = self.cursor_column();
        if col < self.h_scroll {
            self.h_scroll = col;
        } else if col >= self.h_scroll + content_width {
            self.h_scroll = col - content_width + 1;
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // 1 column of border on each side
        let content_width = area.width.saturating_sub(2);
        self.update_scroll(content_width);

        let input = Paragraph::new(self.buffer.as_str())
            .block(
                Block::bordered()
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .title("Input"),
            )
            .style(ratatui::style::Style::default().fg(ratatui::style::Color::Green))
            .scroll((0, self.h_scroll));

        frame.render_widget(input, area);

        let cursor_x = area.x + 1 + self.cursor_column().saturating_sub(self.h_scroll);
        frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor_pos, *c);
                self.cursor_pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: pasted newlines become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor_pos, &text);
                self.cursor_pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(prev..self.cursor_pos);
                    self.cursor_pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor_pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor_pos);
                    self.buffer.drain(self.cursor_pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor_pos > 0 {
                    self.cursor_pos = prev_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor_pos < self.buffer.len() {
                    self.cursor_pos = next_char_boundary(&self.buffer, self.cursor_pos);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor_pos != 0).then(|| {
                self.cursor_pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor_pos != self.buffer.len()).then(|| {
                self.cursor_pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                // Blank buffer: no event and the field keeps its contents
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor_pos = 0;
                    self.h_scroll = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert_eq!(input.cursor_pos, 0);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_submit_takes_raw_buffer() {
        let mut input = InputBox::new();
        input.buffer = "  hello ".to_string();
        input.cursor_pos = input.buffer.len();

        let res = input.handle_event(&TuiEvent::Submit);
        match res {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "  hello "),
            _ => panic!("Expected Submit event"),
        }

        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
        assert_eq!(input.cursor_pos, 0);
    }

    #[test]
    fn test_blank_submit_keeps_buffer() {
        let mut input = InputBox::new();
        for blank in ["", "   ", "\t"] {
            input.buffer = blank.to_string();
            input.cursor_pos = input.buffer.len();
            assert_eq!(input.handle_event(&TuiEvent::Submit), None);
            assert_eq!(input.buffer, blank, "blank buffer must not be cleared");
        }
    }

    #[test]
    fn test_cursor_movement_respects_utf8() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::InputChar('é'));
        input.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(input.cursor_pos, "éx".len());

        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(input.cursor_pos, 0);

        input.handle_event(&TuiEvent::CursorRight);
        assert_eq!(input.cursor_pos, 'é'.len_utf8());
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("one\ntwo".to_string()));
        assert_eq!(input.buffer, "one two");
    }

    #[test]
    fn test_delete_removes_char_at_cursor() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("abc".to_string()));
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "bc");
    }

    #[test]
    fn test_render_shows_buffer() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("hola mundo".to_string()));

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();

        assert!(text.contains("hola mundo"));
        assert!(text.contains("Input"));
    }

    #[test]
    fn test_long_line_scrolls_to_keep_cursor_visible() {
        let backend = TestBackend::new(12, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("a".repeat(50)));

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        assert!(input.h_scroll > 0, "long content must scroll horizontally");
    }
}
