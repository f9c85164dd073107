//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: top bar with the current room and latest notification
//! - `LandingPage`: splash screen / session-resolution spinner
//! - `RoomList`: sidebar of chat rooms with the selection highlighted
//! - `MessageBubble`: a single chat message
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that hold local state and emit high-level events:
//! - `LoginForm`: username/password fields with focus and submit handling
//! - `InputBox`: single-line message input
//! - `MessageList`: scrollable message view with layout caching
//!
//! ## Co-location of Concerns
//!
//! Each component file contains everything related to that component: state
//! types, event types, rendering logic, event handling, and tests. You can
//! read one file to understand how a component works.
//!
//! ## Props-Based Data Flow
//!
//! Components never reach into global state. External data arrives as struct
//! fields or constructor arguments, synced by the event loop before each
//! frame. This keeps dependencies explicit and components testable.

pub mod input_box;
pub mod landing;
pub mod login_form;
pub mod message;
pub mod message_list;
pub mod room_list;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use landing::LandingPage;
pub use login_form::{LoginEvent, LoginForm};
pub use message_list::{MessageList, MessageListState};
pub use room_list::RoomList;
pub use title_bar::TitleBar;
