//! # MessageList Component
//!
//! Scrollable view of the selected room's messages.
//!
//! ## Responsibilities
//!
//! - Display message bubbles, sent ones right-aligned, received left-aligned
//! - Manage scrolling (stick-to-bottom by default, PageUp/Down, mouse wheel)
//! - Cache bubble heights so layout happens without a render pass
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&mut MessageListState` (persistent state) and the message slice (props).
//! `Component::render` takes `&mut self`, so the scroll state and layout
//! cache are updated during the render pass, aligning with Ratatui's
//! `StatefulWidget` pattern.

use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Message;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::{self, MessageBubble};
use crate::tui::event::TuiEvent;

/// Widest a bubble may get, as a fraction of the pane (numerator/denominator).
const BUBBLE_MAX_WIDTH_NUM: u16 = 2;
const BUBBLE_MAX_WIDTH_DEN: u16 = 3;
/// Blank rows between consecutive bubbles.
const BUBBLE_GAP: u16 = 0;

/// Scroll state for the message list. Persisted in the parent TuiState.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Cached per-message heights from the last render
    heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            heights: Vec::new(),
            viewport_height: 0,
        }
    }

    /// Reset scrolling for a newly selected room.
    pub fn reset(&mut self) {
        self.scroll_state = ScrollViewState::default();
        self.stick_to_bottom = true;
        self.heights.clear();
    }

    fn total_height(&self) -> u16 {
        let gaps = (self.heights.len().saturating_sub(1)) as u16 * BUBBLE_GAP;
        self.heights.iter().sum::<u16>() + gaps
    }

    fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport_height)
    }

    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset();
        let new_y = (current.y as i32 + delta).clamp(0, self.max_scroll() as i32) as u16;
        self.scroll_state.set_offset(Position { x: 0, y: new_y });
        // Scrolling away detaches; landing back on the bottom re-pins.
        self.stick_to_bottom = new_y >= self.max_scroll();
    }
}

impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-(self.viewport_height.max(1) as i32)),
            TuiEvent::ScrollPageDown => self.scroll_by(self.viewport_height.max(1) as i32),
            _ => return None,
        }
        Some(())
    }
}

/// Transient render wrapper over the message slice and persistent state.
pub struct MessageList<'a> {
    pub messages: &'a [Message],
    pub state: &'a mut MessageListState,
}

impl<'a> MessageList<'a> {
    pub fn new(messages: &'a [Message], state: &'a mut MessageListState) -> Self {
        Self { messages, state }
    }

    fn bubble_width(message: &Message, pane_width: u16) -> u16 {
        let max_width = pane_width * BUBBLE_MAX_WIDTH_NUM / BUBBLE_MAX_WIDTH_DEN;
        let longest_line = message
            .content
            .trim()
            .lines()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0);
        // Timestamp line ("HH:MM:SS") sets a floor on useful width.
        let content = longest_line.max(8);
        (content + message::HORIZONTAL_OVERHEAD).min(max_width.max(message::HORIZONTAL_OVERHEAD + 1))
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport_height = area.height;

        if self.messages.is_empty() {
            let empty = Paragraph::new("No messages yet. Say hello!")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // room for scrollbar

        // Measure every bubble first so scroll bounds are known up front.
        let widths: Vec<u16> = self
            .messages
            .iter()
            .map(|m| Self::bubble_width(m, content_width))
            .collect();
        self.state.heights = self
            .messages
            .iter()
            .zip(&widths)
            .map(|(m, &w)| MessageBubble::calculate_height(m, w))
            .collect();

        let total_height = self.state.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for ((msg, &width), &height) in self.messages.iter().zip(&widths).zip(&self.state.heights) {
            // Sent bubbles hug the right edge, received ones the left.
            let x = if message::is_sent(msg) {
                content_width.saturating_sub(width)
            } else {
                0
            };
            let bubble_rect = Rect::new(x, y_offset, width, height);
            scroll_view.render_widget(MessageBubble::new(msg), bubble_rect);
            y_offset += height + BUBBLE_GAP;
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.set_offset(Position {
                x: 0,
                y: self.state.max_scroll(),
            });
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_message(id: i64, sender: i64, content: &str) -> Message {
        Message {
            id,
            sender,
            receiver: vec![2],
            content: content.to_string(),
            timestamp: "2025-03-01T12:00:00+00:00".to_string(),
            chat_room: 1,
        }
    }

    #[test]
    fn test_render_empty_list_shows_placeholder() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MessageListState::new();

        terminal
            .draw(|f| MessageList::new(&[], &mut state).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("No messages yet"));
    }

    #[test]
    fn test_render_shows_message_content() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MessageListState::new();
        let messages = vec![make_message(1, 2, "hello there")];

        terminal
            .draw(|f| MessageList::new(&messages, &mut state).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("hello there"));
    }

    #[test]
    fn test_heights_cached_after_render() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = MessageListState::new();
        let messages = vec![
            make_message(1, 1, "one"),
            make_message(2, 2, "two"),
        ];

        terminal
            .draw(|f| MessageList::new(&messages, &mut state).render(f, f.area()))
            .unwrap();

        assert_eq!(state.heights.len(), 2);
        assert!(state.heights.iter().all(|&h| h >= 4));
    }

    #[test]
    fn test_scroll_events_detach_and_repin() {
        let mut state = MessageListState::new();
        state.viewport_height = 5;
        state.heights = vec![4, 4, 4, 4]; // total 16, max_scroll 11
        state.scroll_state.set_offset(Position { x: 0, y: 11 });

        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);
        assert_eq!(state.scroll_state.offset().y, 10);

        state.handle_event(&TuiEvent::ScrollPageDown);
        assert!(state.stick_to_bottom);
        assert_eq!(state.scroll_state.offset().y, 11);
    }

    #[test]
    fn test_reset_clears_scroll() {
        let mut state = MessageListState::new();
        state.viewport_height = 5;
        state.heights = vec![4, 4, 4];
        state.scroll_state.set_offset(Position { x: 0, y: 3 });
        state.stick_to_bottom = false;

        state.reset();
        assert!(state.stick_to_bottom);
        assert_eq!(state.scroll_state.offset().y, 0);
        assert!(state.heights.is_empty());
    }
}
