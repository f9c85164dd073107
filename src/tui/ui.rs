//! Frame composition. Picks the layout for the active route and hands each
//! region to a component. No event handling lives here.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use crate::core::state::{App, Route};
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, MessageList, RoomList, TitleBar};
use crate::tui::TuiState;

/// Sidebar width for the chat view's room list.
const SIDEBAR_WIDTH: u16 = 28;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let room_name = match app.route {
        Route::Chat => app.selected_room.as_ref().map(|r| r.name.clone()),
        _ => None,
    };
    TitleBar::new(room_name, app.notice.clone()).render(frame, title_area);

    match app.route {
        Route::Landing => {
            LandingPage::new(app.resolving_session, spinner_frame).render(frame, body_area);
        }
        Route::Login => {
            tui.login_form.render(frame, body_area);
        }
        Route::Chat => draw_chat_view(frame, body_area, app, tui),
    }
}

fn draw_chat_view(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [sidebar_area, main_area] =
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(area);
    let [messages_area, input_area] = Layout::vertical([Min(0), Length(3)]).areas(main_area);

    RoomList::new(
        &app.chat_rooms,
        app.selected_room.as_ref().map(|r| r.id),
        app.session.as_ref().map(|s| s.username.as_str()),
    )
    .render(frame, sidebar_area);

    MessageList::new(&app.messages, &mut tui.message_list).render(frame, messages_area);

    tui.input_box.render(frame, input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Notice;
    use crate::test_support::{message_in_room, room, test_session};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw_to_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_landing_route() {
        let mut app = App::new();
        app.resolving_session = false;
        let text = draw_to_text(&app);
        assert!(text.contains("Get Started"));
    }

    #[test]
    fn test_draw_login_route() {
        let mut app = App::new();
        app.resolving_session = false;
        app.route = Route::Login;
        let text = draw_to_text(&app);
        assert!(text.contains("Sign In"));
        assert!(text.contains("Username"));
    }

    #[test]
    fn test_draw_chat_route_with_rooms_and_messages() {
        let mut app = App::new();
        app.resolving_session = false;
        app.route = Route::Chat;
        app.session = Some(test_session());
        app.chat_rooms = vec![room(1, "general"), room(2, "random")];
        app.selected_room = Some(room(1, "general"));
        app.messages = vec![message_in_room(10, 1, "hello world")];

        let text = draw_to_text(&app);
        assert!(text.contains("# general"));
        assert!(text.contains("hello world"));
        assert!(text.contains("@testuser"));
    }

    #[test]
    fn test_draw_shows_notice_in_title() {
        let mut app = App::new();
        app.resolving_session = false;
        app.route = Route::Login;
        app.notice = Some(Notice::error("Invalid username or password"));
        let text = draw_to_text(&app);
        assert!(text.contains("Invalid username or password"));
    }
}
