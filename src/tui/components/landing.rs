//! # Landing Page Component
//!
//! Splash view shown before login. While the startup session load is still
//! in flight it shows only a spinner; once resolved (and no session was
//! found) it shows the marketing copy and the Get Started hint.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LandingPage {
    /// Startup session load still in flight (Prop)
    pub resolving: bool,
    /// Animation frame counter from the event loop
    pub spinner_frame: usize,
}

impl LandingPage {
    pub fn new(resolving: bool, spinner_frame: usize) -> Self {
        Self {
            resolving,
            spinner_frame,
        }
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.resolving {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            let [line_area] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(area);
            frame.render_widget(
                Paragraph::new(format!("{spinner} checking session..."))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray)),
                line_area,
            );
            return;
        }

        let mut text_lines = Vec::new();

        text_lines.push(Line::from(Span::styled(
            "Connect, Chat, Collaborate",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        text_lines.push(Line::from(""));
        text_lines.push(Line::from(Span::styled(
            "Join conversations, share ideas, and stay connected with your team",
            Style::default().fg(Color::Gray),
        )));
        text_lines.push(Line::from(""));
        text_lines.push(Line::from(Span::styled(
            "[Enter] Get Started    [Esc] Quit",
            Style::default().fg(Color::DarkGray),
        )));
        text_lines.push(Line::from(""));
        text_lines.push(Line::from(Span::styled(
            format!("Parley v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )));

        let text_height = text_lines.len() as u16;
        let [text_area] = Layout::vertical([Constraint::Length(text_height)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(
            Paragraph::new(text_lines).alignment(Alignment::Center),
            text_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(resolving: bool) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| LandingPage::new(resolving, 0).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_resolving_shows_spinner_not_splash() {
        let text = render_to_text(true);
        assert!(text.contains("checking session..."));
        assert!(!text.contains("Get Started"));
    }

    #[test]
    fn test_resolved_shows_splash() {
        let text = render_to_text(false);
        assert!(text.contains("Connect, Chat, Collaborate"));
        assert!(text.contains("Get Started"));
    }
}
