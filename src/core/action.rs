//! # Actions
//!
//! Everything that can happen in Parley becomes an `Action`.
//! User picks a room? That's `Action::SelectRoom`.
//! A fetch task reports back? That's `Action::RoomsFetched(result)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns the `Effect` the caller must execute. No I/O happens
//! here - HTTP calls and session file writes run as tokio tasks in the TUI
//! layer, which feeds their results back in as new actions.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```
//!
//! This makes every behavior testable without a terminal or a server:
//! `assert_eq!(update(&mut app, action), expected_effect)`.

use log::{debug, warn};

use crate::api::{ApiError, ChatRoom, Message};
use crate::core::session::Session;
use crate::core::state::{App, Notice, Route};

#[derive(Debug)]
pub enum Action {
    Navigate(Route),
    /// Startup session load finished (None = logged out).
    SessionResolved(Option<Session>),
    /// Login form submitted. Empty fields make this a no-op.
    SubmitLogin {
        username: String,
        password: String,
    },
    LoginFinished(Result<Session, ApiError>),
    RoomsFetched(Result<Vec<ChatRoom>, ApiError>),
    /// A room was picked in the sidebar.
    SelectRoom(i64),
    /// A message fetch reported back. `room_id` is the room the fetch was
    /// issued for; the reducer discards results for stale selections.
    MessagesFetched {
        room_id: i64,
        result: Result<Vec<Message>, ApiError>,
    },
    /// Message input submitted. Whitespace-only input makes this a no-op.
    SubmitMessage(String),
    SendFinished {
        room_id: i64,
        result: Result<(), ApiError>,
    },
    Logout,
    LogoutFinished,
    Quit,
}

/// What the caller must do after an `update()`. Exactly one per action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Call the login endpoint with these credentials, persist the session on
    /// success, and feed back `LoginFinished`.
    Login { username: String, password: String },
    /// Authenticated room-list fetch; feed back `RoomsFetched`.
    FetchRooms { token: String },
    /// Full message-collection fetch; feed back `MessagesFetched` tagged with
    /// this room id.
    FetchMessages { room_id: i64 },
    /// Compose and POST a message; feed back `SendFinished`.
    SendMessage { content: String, room_id: i64 },
    /// A send succeeded: clear the input field, then fetch messages again.
    SendCompleted { room_id: i64 },
    /// Destroy the persisted session, then feed back `LogoutFinished`.
    Logout,
    Quit,
}

/// Apply `action` to `app`, returning the effect to execute.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(route) => navigate(app, route),

        Action::SessionResolved(session) => {
            app.resolving_session = false;
            app.session = session;
            if app.session.is_some() {
                // A live session skips the splash entirely.
                navigate(app, Route::Chat)
            } else {
                Effect::None
            }
        }

        Action::SubmitLogin { username, password } => {
            // Required-field guard: the form enforces this too, but the
            // reducer is the authority - login is never invoked with an
            // empty field.
            if username.is_empty() || password.is_empty() || app.login_pending {
                return Effect::None;
            }
            app.login_pending = true;
            Effect::Login { username, password }
        }

        Action::LoginFinished(result) => {
            app.login_pending = false;
            match result {
                Ok(session) => {
                    app.notice = Some(Notice::success("Welcome back!"));
                    app.session = Some(session);
                    navigate(app, Route::Chat)
                }
                Err(e) => {
                    warn!("Login failed: {}", e);
                    app.notice = Some(Notice::error("Invalid username or password"));
                    Effect::None
                }
            }
        }

        Action::RoomsFetched(result) => match result {
            Ok(rooms) => {
                // Replace, never append: refetching the same list is a no-op.
                app.chat_rooms = rooms;
                if app.selected_room.is_none()
                    && let Some(first) = app.chat_rooms.first()
                {
                    app.selected_room = Some(first.clone());
                    return Effect::FetchMessages { room_id: first.id };
                }
                Effect::None
            }
            Err(e) => {
                warn!("Room fetch failed: {}", e);
                app.notice = Some(Notice::error("Failed to fetch chat rooms"));
                Effect::None
            }
        },

        Action::SelectRoom(room_id) => {
            match app.chat_rooms.iter().find(|r| r.id == room_id) {
                Some(room) => {
                    app.selected_room = Some(room.clone());
                    Effect::FetchMessages { room_id }
                }
                None => Effect::None,
            }
        }

        Action::MessagesFetched { room_id, result } => {
            // Stale-response guard: a fetch issued for a previously selected
            // room must not overwrite the current room's view.
            if app.selected_room.as_ref().map(|r| r.id) != Some(room_id) {
                debug!("Discarding stale message fetch for room {}", room_id);
                return Effect::None;
            }
            match result {
                Ok(all) => {
                    // The endpoint returns every room's messages; keep the
                    // selected room's, in server order.
                    app.messages = all.into_iter().filter(|m| m.chat_room == room_id).collect();
                }
                Err(e) => {
                    warn!("Message fetch failed: {}", e);
                    app.notice = Some(Notice::error("Failed to fetch messages"));
                }
            }
            Effect::None
        }

        Action::SubmitMessage(content) => {
            if content.trim().is_empty() || app.is_sending {
                return Effect::None;
            }
            let Some(room) = &app.selected_room else {
                return Effect::None;
            };
            app.is_sending = true;
            Effect::SendMessage {
                content,
                room_id: room.id,
            }
        }

        Action::SendFinished { room_id, result } => {
            // Cleared on every completion path so the input never wedges.
            app.is_sending = false;
            match result {
                Ok(()) => Effect::SendCompleted { room_id },
                Err(e) => {
                    warn!("Send failed: {}", e);
                    app.notice = Some(Notice::error("Failed to send message"));
                    Effect::None
                }
            }
        }

        Action::Logout => Effect::Logout,

        Action::LogoutFinished => {
            app.session = None;
            app.chat_rooms.clear();
            app.selected_room = None;
            app.messages.clear();
            app.notice = None;
            app.route = Route::Login;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// Route change plus its mount effect. Entering `Chat` without a session
/// falls back to the login view; entering with one kicks off the room fetch.
fn navigate(app: &mut App, route: Route) -> Effect {
    match route {
        Route::Chat => match &app.session {
            Some(session) => {
                app.route = Route::Chat;
                Effect::FetchRooms {
                    token: session.token.clone(),
                }
            }
            None => {
                app.route = Route::Login;
                Effect::None
            }
        },
        other => {
            app.route = other;
            Effect::None
        }
    }
}
