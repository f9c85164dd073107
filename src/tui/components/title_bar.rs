//! # TitleBar Component
//!
//! Single-line top bar showing where the user is and the latest
//! notification.
//!
//! ## Conditional Formatting
//!
//! 1. **With a notice**: `"Parley | # general | Welcome back!"`
//! 2. **In a room, no notice**: `"Parley | # general"`
//! 3. **Default**: `"Parley"`
//!
//! Notices color the whole line: green for success, red for error. The bar
//! is stateless - all fields are props the event loop syncs each frame.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::Frame;

use crate::core::state::{Notice, NoticeKind};
use crate::tui::component::Component;

pub struct TitleBar {
    /// Selected room name, if the chat view has one
    pub room_name: Option<String>,
    /// Latest notification to surface
    pub notice: Option<Notice>,
}

impl TitleBar {
    pub fn new(room_name: Option<String>, notice: Option<Notice>) -> Self {
        Self { room_name, notice }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title_text = String::from("Parley");
        if let Some(room) = &self.room_name {
            title_text.push_str(&format!(" | # {room}"));
        }

        let style = match &self.notice {
            Some(notice) => {
                title_text.push_str(&format!(" | {}", notice.text));
                match notice.kind {
                    NoticeKind::Success => Style::default().fg(Color::Green),
                    NoticeKind::Error => Style::default().fg(Color::Red),
                }
            }
            None => Style::default(),
        };

        frame.render_widget(Span::styled(title_text, style), area);
    }
}
