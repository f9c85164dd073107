//! # LoginForm Component
//!
//! Username/password form with a "Sign In" submit control.
//!
//! ## Contract
//!
//! - Both fields are required: Enter with either field empty emits nothing,
//!   so the login call is never made for an incomplete form.
//! - While a login is pending (`pending` prop), both fields and the submit
//!   control render disabled, the control reads "Signing in...", and all
//!   input events are ignored.
//! - Tab cycles focus between the two fields.
//!
//! ## State Management
//!
//! Field buffers and focus are internal state. `pending` is a prop from the
//! application state, synced by the event loop before each frame.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const FORM_WIDTH: u16 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Username,
    Password,
}

/// High-level events emitted by the LoginForm
#[derive(Debug, Clone, PartialEq)]
pub enum LoginEvent {
    /// Both fields were non-empty and Enter was pressed.
    Submit { username: String, password: String },
    ContentChanged,
}

pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Disables the whole form while the login call is in flight (Prop)
    pub pending: bool,
    focus: Field,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            pending: false,
            focus: Field::Username,
        }
    }

    fn focused_buffer(&mut self) -> &mut String {
        match self.focus {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }

    fn field_style(&self, field: Field) -> Style {
        if self.pending {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else if self.focus == field {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LoginForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Centered column: heading, username, password, submit control.
        let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [heading, username_area, password_area, button_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

        frame.render_widget(
            Paragraph::new("Sign in to Parley").alignment(Alignment::Center),
            heading,
        );

        let username = Paragraph::new(self.username.as_str())
            .block(Block::bordered().title("Username"))
            .style(self.field_style(Field::Username));
        frame.render_widget(username, username_area);

        let masked = "\u{2022}".repeat(self.password.chars().count());
        let password = Paragraph::new(masked)
            .block(Block::bordered().title("Password"))
            .style(self.field_style(Field::Password));
        frame.render_widget(password, password_area);

        let label = if self.pending { "Signing in..." } else { "Sign In" };
        let button_style = if self.pending {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Line::styled(format!("[ {label} ]"), button_style))
                .alignment(Alignment::Center),
            button_area,
        );

        if !self.pending {
            // Bullets are width 1, so the mask's width is the char count.
            let (field_area, text_width) = match self.focus {
                Field::Username => (username_area, self.username.width() as u16),
                Field::Password => (password_area, self.password.chars().count() as u16),
            };
            let cursor_x = field_area.x + 1 + text_width;
            frame.set_cursor_position((
                cursor_x.min(field_area.x + field_area.width.saturating_sub(2)),
                field_area.y + 1,
            ));
        }
    }
}

impl EventHandler for LoginForm {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.pending {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.focused_buffer().push(*c);
                Some(LoginEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let flat = text.replace(['\r', '\n'], "");
                self.focused_buffer().push_str(&flat);
                Some(LoginEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                let buffer = self.focused_buffer();
                buffer.pop().map(|_| LoginEvent::ContentChanged)
            }
            TuiEvent::FocusNext => {
                self.focus = match self.focus {
                    Field::Username => Field::Password,
                    Field::Password => Field::Username,
                };
                Some(LoginEvent::ContentChanged)
            }
            TuiEvent::Submit => {
                // Required-field guard: an incomplete form never submits.
                if self.username.is_empty() || self.password.is_empty() {
                    None
                } else {
                    Some(LoginEvent::Submit {
                        username: self.username.clone(),
                        password: self.password.clone(),
                    })
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

    fn type_text(form: &mut LoginForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut form = LoginForm::new();
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);

        type_text(&mut form, "testuser");
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);

        form.handle_event(&TuiEvent::FocusNext);
        type_text(&mut form, "password123");
        assert_eq!(
            form.handle_event(&TuiEvent::Submit),
            Some(LoginEvent::Submit {
                username: "testuser".to_string(),
                password: "password123".to_string(),
            })
        );
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut form = LoginForm::new();
        type_text(&mut form, "user");
        form.handle_event(&TuiEvent::FocusNext);
        type_text(&mut form, "pass");
        form.handle_event(&TuiEvent::FocusNext);
        type_text(&mut form, "name");

        assert_eq!(form.username, "username");
        assert_eq!(form.password, "pass");
    }

    #[test]
    fn test_pending_disables_all_input() {
        let mut form = LoginForm::new();
        type_text(&mut form, "testuser");
        form.handle_event(&TuiEvent::FocusNext);
        type_text(&mut form, "password123");
        form.pending = true;

        assert_eq!(form.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(form.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);
        assert_eq!(form.username, "testuser");
        assert_eq!(form.password, "password123");
    }

    #[test]
    fn test_render_shows_sign_in_label() {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut form = LoginForm::new();

        terminal.draw(|f| form.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Sign In"));
        assert!(text.contains("Username"));
        assert!(text.contains("Password"));
    }

    #[test]
    fn test_render_shows_signing_in_while_pending() {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut form = LoginForm::new();
        form.pending = true;

        terminal.draw(|f| form.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Signing in..."));
    }

    #[test]
    fn test_password_renders_masked() {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut form = LoginForm::new();
        form.handle_event(&TuiEvent::FocusNext);
        type_text(&mut form, "secret");

        terminal.draw(|f| form.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(!text.contains("secret"));
        assert!(text.contains('\u{2022}'));
    }
}
