//! HTTP client for the chat-rooms API.
//!
//! All four server operations live behind the [`ChatApi`] trait so the TUI
//! and the reducer tests can substitute a stub. [`HttpChatApi`] is the real
//! reqwest-backed implementation.
//!
//! Success is judged solely by the HTTP status being 2xx; non-2xx responses
//! and transport errors are distinct [`ApiError`] variants but every call
//! site collapses them into the same per-operation notification.

use std::fmt;

use async_trait::async_trait;
use log::debug;

use super::types::{ChatRoom, LoginRequest, LoginResponse, Message, NewMessage};

/// Errors from API operations. Variants are distinguished for logging; the
/// UI maps all of them to one notification string per operation.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (DNS, connection refused, closed socket).
    Network(String),
    /// Server answered outside the 2xx range.
    Api { status: u16 },
    /// Body arrived but didn't decode as the expected JSON.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status } => write!(f, "API error (HTTP {status})"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// The four operations the client performs against the server.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Exchange credentials for an auth token.
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    /// Fetch the authenticated user's room list.
    async fn chat_rooms(&self, token: &str) -> Result<Vec<ChatRoom>, ApiError>;

    /// Fetch the full message collection across all rooms. The server has no
    /// room filter; callers filter client-side.
    async fn messages(&self) -> Result<Vec<Message>, ApiError>;

    /// Post a new message. The server assigns the id; only the status matters.
    async fn send_message(&self, message: &NewMessage) -> Result<(), ApiError>;
}

/// reqwest-backed [`ChatApi`] implementation.
pub struct HttpChatApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpChatApi {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.url("/api/login/"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
            });
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        debug!("Login succeeded for {username}");
        Ok(login.token)
    }

    async fn chat_rooms(&self, token: &str) -> Result<Vec<ChatRoom>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/chat_rooms/"))
            .header("Authorization", format!("token {token}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
            });
        }

        let rooms: Vec<ChatRoom> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        debug!("Fetched {} chat rooms", rooms.len());
        Ok(rooms)
    }

    async fn messages(&self) -> Result<Vec<Message>, ApiError> {
        let response = self.http.get(self.url("/api/send_message/")).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
            });
        }

        let messages: Vec<Message> = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        debug!("Fetched {} messages (all rooms)", messages.len());
        Ok(messages)
    }

    async fn send_message(&self, message: &NewMessage) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/api/send_message/"))
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
            });
        }
        debug!("Message posted to room {}", message.chat_room);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let api = HttpChatApi::new("http://example.com/".to_string());
        assert_eq!(api.url("/api/chat_rooms/"), "http://example.com/api/chat_rooms/");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Api { status: 503 };
        assert_eq!(err.to_string(), "API error (HTTP 503)");

        let err = ApiError::Network("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
