//! # Application State
//!
//! Core business state for Parley. This module contains domain logic only -
//! no TUI-specific types. Presentation state (input buffers, scroll offsets)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── route: Route                  // which view is active
//! ├── session: Option<Session>      // authenticated user, if any
//! ├── resolving_session: bool       // startup session load in flight
//! ├── chat_rooms: Vec<ChatRoom>     // sidebar room list
//! ├── selected_room: Option<ChatRoom>
//! ├── messages: Vec<Message>        // filtered view for the selected room
//! ├── login_pending: bool           // login call in flight
//! ├── is_sending: bool              // send call in flight
//! └── notice: Option<Notice>        // transient success/error notification
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::api::{ChatRoom, Message};
use crate::core::session::Session;

/// The three views of the client. Stands in for the original's URL routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, non-blocking user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

pub struct App {
    pub route: Route,
    pub session: Option<Session>,
    /// True until the startup session load reports back. The landing view
    /// shows a spinner while this holds.
    pub resolving_session: bool,
    pub chat_rooms: Vec<ChatRoom>,
    pub selected_room: Option<ChatRoom>,
    /// Always the filtered view of the most recent fetch for the selected
    /// room. Each fetch replaces this wholesale; nothing is merged.
    pub messages: Vec<Message>,
    pub login_pending: bool,
    pub is_sending: bool,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new() -> Self {
        Self {
            route: Route::Landing,
            session: None,
            resolving_session: true,
            chat_rooms: Vec::new(),
            selected_room: None,
            messages: Vec::new(),
            login_pending: false,
            is_sending: false,
            notice: None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.route, Route::Landing);
        assert!(app.session.is_none());
        assert!(app.resolving_session);
        assert!(app.chat_rooms.is_empty());
        assert!(app.messages.is_empty());
        assert!(!app.login_pending);
        assert!(!app.is_sending);
        assert!(app.notice.is_none());
    }
}
