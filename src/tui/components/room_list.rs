//! # RoomList Component
//!
//! Sidebar listing the user's chat rooms with the current selection
//! highlighted. Stateless: selection lives in core state, navigation events
//! are handled by the event loop (`Up`/`Down` become `Action::SelectRoom`).

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::api::ChatRoom;
use crate::tui::component::Component;

pub struct RoomList<'a> {
    pub rooms: &'a [ChatRoom],
    pub selected_id: Option<i64>,
    pub username: Option<&'a str>,
}

impl<'a> RoomList<'a> {
    pub fn new(rooms: &'a [ChatRoom], selected_id: Option<i64>, username: Option<&'a str>) -> Self {
        Self {
            rooms,
            selected_id,
            username,
        }
    }
}

impl<'a> Component for RoomList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let lines: Vec<Line> = if self.rooms.is_empty() {
            vec![Line::styled(
                " no rooms",
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            self.rooms
                .iter()
                .map(|room| {
                    let selected = self.selected_id == Some(room.id);
                    let style = if selected {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    Line::styled(format!(" # {}", room.name), style)
                })
                .collect()
        };

        let list = Paragraph::new(lines).block(Block::bordered().title("Chat Rooms"));
        frame.render_widget(list, list_area);

        // "@username  [^D] logout" footer under the room list
        let footer = match self.username {
            Some(name) => format!("@{name}  [^D] logout"),
            None => "[^D] logout".to_string(),
        };
        frame.render_widget(
            Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
            footer_area,
        );
    }
}
