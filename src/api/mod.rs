pub mod client;
pub mod types;

pub use client::{ApiError, ChatApi, HttpChatApi};
pub use types::{ChatRoom, LoginRequest, LoginResponse, Message, NewMessage};
pub use types::{DEFAULT_RECEIVERS, SELF_SENDER_ID};
