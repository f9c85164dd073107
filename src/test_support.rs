//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{ApiError, ChatApi, ChatRoom, Message, NewMessage};
use crate::core::session::Session;
use crate::core::state::{App, Route};

/// A no-op API for tests that don't need real HTTP calls.
pub struct StubApi;

#[async_trait]
impl ChatApi for StubApi {
    async fn login(&self, _username: &str, _password: &str) -> Result<String, ApiError> {
        Ok("stub-token".to_string())
    }

    async fn chat_rooms(&self, _token: &str) -> Result<Vec<ChatRoom>, ApiError> {
        Ok(Vec::new())
    }

    async fn messages(&self) -> Result<Vec<Message>, ApiError> {
        Ok(Vec::new())
    }

    async fn send_message(&self, _message: &NewMessage) -> Result<(), ApiError> {
        Ok(())
    }
}

pub fn test_session() -> Session {
    Session {
        username: "testuser".to_string(),
        token: "test-token".to_string(),
    }
}

/// An App already past session resolution and sitting on the chat view.
pub fn chat_app() -> App {
    let mut app = App::new();
    app.resolving_session = false;
    app.session = Some(test_session());
    app.route = Route::Chat;
    app
}

pub fn room(id: i64, name: &str) -> ChatRoom {
    ChatRoom {
        id,
        name: name.to_string(),
    }
}

pub fn message_in_room(id: i64, chat_room: i64, content: &str) -> Message {
    Message {
        id,
        sender: 2,
        receiver: vec![1],
        content: content.to_string(),
        timestamp: "2025-03-01T12:00:00Z".to_string(),
        chat_room,
    }
}
