//! # InputBox Component
//!
//! Single-line message input for the chat view.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit submission (Enter) - only for non-whitespace content
//!
//! ## State Management
//!
//! The buffer is internal state. Whether the box is disabled (a send in
//! flight) is a prop from the application state. Submission does NOT clear
//! the buffer: the text stays put until the send succeeds, at which point the
//! event loop calls [`InputBox::clear`].

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted non-empty text (Enter pressed)
    Submit(String),
    /// Text content changed
    ContentChanged,
}

/// Single-line text input.
///
/// # Props
///
/// - `disabled`: true while a send is in flight (input is ignored and dimmed)
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: byte offset into `buffer`, always on a char boundary
pub struct InputBox {
    pub buffer: String,
    /// Disabled while a send is in flight (Prop)
    pub disabled: bool,
    cursor: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            disabled: false,
            cursor: 0,
        }
    }

    /// Empty the buffer. Called by the event loop once a send succeeds.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.disabled {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Green)
        };

        let title = if self.disabled { "Sending..." } else { "Message" };

        let input = Paragraph::new(self.buffer.as_str())
            .block(
                Block::bordered()
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .title(title),
            )
            .style(style);

        frame.render_widget(input, area);

        if !self.disabled {
            let cursor_x = area.x + 1 + self.buffer[..self.cursor].width() as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.disabled {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line input: flatten pasted newlines to spaces.
                let flat = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = self.next_boundary();
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.prev_boundary();
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.next_boundary();
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => {
                (self.cursor != 0).then(|| {
                    self.cursor = 0;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                (self.cursor != self.buffer.len()).then(|| {
                    self.cursor = self.buffer.len();
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::Submit => {
                // Whitespace-only submits are swallowed here; the reducer
                // applies the same guard. The buffer is intentionally NOT
                // cleared - that happens only after a successful send.
                if self.buffer.trim().is_empty() {
                    None
                } else {
                    Some(InputEvent::Submit(self.buffer.clone()))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert!(!input.disabled);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('h')),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('i')),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(input.buffer, "hi");

        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(input.buffer, "h");
    }

    #[test]
    fn test_submit_keeps_buffer_until_cleared() {
        let mut input = InputBox::new();
        input.buffer = "hello".to_string();

        match input.handle_event(&TuiEvent::Submit) {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "hello"),
            other => panic!("Expected Submit event, got {:?}", other),
        }
        // Buffer survives until the send succeeds.
        assert_eq!(input.buffer, "hello");

        input.clear();
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_whitespace_only_submit_is_swallowed() {
        let mut input = InputBox::new();
        for text in ["", "   ", "\t"] {
            input.buffer = text.to_string();
            assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        }
    }

    #[test]
    fn test_disabled_ignores_events() {
        let mut input = InputBox::new();
        input.buffer = "hello".to_string();
        input.disabled = true;

        assert_eq!(input.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "hello");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("two\nlines".to_string()));
        assert_eq!(input.buffer, "two lines");
    }

    #[test]
    fn test_render_shows_sending_title_when_disabled() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        input.disabled = true;

        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Sending..."));
    }
}
