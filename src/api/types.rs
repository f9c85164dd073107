//! Wire types for the chat-rooms HTTP API.
//!
//! Field names match the server's JSON exactly (snake_case throughout), so
//! no serde renames are needed.

use serde::{Deserialize, Serialize};

/// Sender id stamped onto every outgoing message.
///
/// TODO: derive this (and `DEFAULT_RECEIVERS`) from the authenticated account
/// once the login response carries a numeric user id. Today the API only
/// hands back a token, so the client keeps the fixed ids the server expects.
pub const SELF_SENDER_ID: i64 = 1;

/// Receiver set stamped onto every outgoing message. See [`SELF_SENDER_ID`].
pub const DEFAULT_RECEIVERS: [i64; 1] = [2];

/// A named channel grouping messages. Fetched, never locally mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatRoom {
    pub id: i64,
    pub name: String,
}

/// A message as returned by the server. Immutable once received.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Message {
    pub id: i64,
    pub sender: i64,
    pub receiver: Vec<i64>,
    pub content: String,
    /// ISO-8601 timestamp string, passed through as the server sent it.
    pub timestamp: String,
    pub chat_room: i64,
}

/// POST body for sending a message: [`Message`] minus the server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender: i64,
    pub receiver: Vec<i64>,
    pub content: String,
    pub timestamp: String,
    pub chat_room: i64,
}

impl NewMessage {
    /// Builds the POST body for `content` in `chat_room`, stamped with the
    /// fixed sender/receiver pair and the current UTC time.
    pub fn compose(content: String, chat_room: i64) -> Self {
        Self {
            sender: SELF_SENDER_ID,
            receiver: DEFAULT_RECEIVERS.to_vec(),
            content,
            timestamp: chrono::Utc::now().to_rfc3339(),
            chat_room,
        }
    }
}

/// POST body for `/api/login/`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from `/api/login/`: the token used for authenticated requests.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_deserializes_server_shape() {
        let json = r#"{
            "id": 7,
            "sender": 1,
            "receiver": [2],
            "content": "hello",
            "timestamp": "2025-03-01T12:00:00Z",
            "chat_room": 3
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.id, 7);
        assert_eq!(msg.receiver, vec![2]);
        assert_eq!(msg.chat_room, 3);
    }

    #[test]
    fn test_compose_stamps_fixed_identity() {
        let msg = NewMessage::compose("hi".to_string(), 5);
        assert_eq!(msg.sender, SELF_SENDER_ID);
        assert_eq!(msg.receiver, DEFAULT_RECEIVERS.to_vec());
        assert_eq!(msg.chat_room, 5);
        // RFC 3339 timestamps parse back
        assert!(chrono::DateTime::parse_from_rfc3339(&msg.timestamp).is_ok());
    }

    #[test]
    fn test_new_message_has_no_id_field() {
        let msg = NewMessage::compose("hi".to_string(), 1);
        let value = serde_json::to_value(&msg).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("content").is_some());
    }
}
