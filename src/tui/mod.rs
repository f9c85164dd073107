//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! reducer never touches a terminal, so it stays testable headless.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (session resolution, login or send in flight): draws every
//!   ~80ms for a smooth spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{mpsc, Arc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{ChatApi, ChatRoom, HttpChatApi, NewMessage};
use crate::core::action::{update, Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::session::{self, Session};
use crate::core::state::{App, Route};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, LoginEvent, LoginForm, MessageListState};
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub login_form: LoginForm,
    pub input_box: InputBox,
    pub message_list: MessageListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            login_form: LoginForm::new(),
            input_box: InputBox::new(),
            message_list: MessageListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn ChatApi> = Arc::new(HttpChatApi::new(config.server_url.clone()));
    let mut app = App::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Startup: resolve the persisted session off the event loop. The landing
    // view spins until this reports back.
    {
        let tx = tx.clone();
        tokio::task::spawn_blocking(move || {
            let loaded = session::load_session();
            if tx.send(Action::SessionResolved(loaded)).is_err() {
                warn!("Failed to deliver session resolution: receiver dropped");
            }
        });
    }

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with App state
        tui.input_box.disabled = app.is_sending;
        tui.login_form.pending = app.login_pending;

        let animating = app.resolving_session || app.login_pending || app.is_sending;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of route
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            let action = match app.route {
                Route::Landing => handle_landing_event(&app, &event),
                Route::Login => handle_login_event(&mut tui, &event),
                Route::Chat => handle_chat_event(&app, &mut tui, &event),
            };
            if let Some(action) = action {
                let effect = update(&mut app, action);
                if run_effect(effect, &api, &mut tui, &tx) {
                    should_quit = true;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if run_effect(effect, &api, &mut tui, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_landing_event(app: &App, event: &TuiEvent) -> Option<Action> {
    match event {
        // No navigation until the startup session load reports back.
        TuiEvent::Submit if !app.resolving_session => Some(Action::Navigate(Route::Login)),
        TuiEvent::Escape => Some(Action::Quit),
        _ => None,
    }
}

fn handle_login_event(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::Escape) {
        return Some(Action::Navigate(Route::Landing));
    }
    match tui.login_form.handle_event(event)? {
        LoginEvent::Submit { username, password } => {
            Some(Action::SubmitLogin { username, password })
        }
        LoginEvent::ContentChanged => None,
    }
}

fn handle_chat_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::Logout => Some(Action::Logout),
        TuiEvent::RoomUp => {
            adjacent_room(&app.chat_rooms, app.selected_room.as_ref().map(|r| r.id), -1)
                .map(Action::SelectRoom)
        }
        TuiEvent::RoomDown => {
            adjacent_room(&app.chat_rooms, app.selected_room.as_ref().map(|r| r.id), 1)
                .map(Action::SelectRoom)
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.message_list.handle_event(event);
            None
        }
        _ => match tui.input_box.handle_event(event)? {
            InputEvent::Submit(text) => Some(Action::SubmitMessage(text)),
            InputEvent::ContentChanged => None,
        },
    }
}

/// Room id one step up/down from the current selection, clamped at the list
/// edges. No selection yet means Up/Down lands on the first room.
fn adjacent_room(rooms: &[ChatRoom], selected: Option<i64>, step: i32) -> Option<i64> {
    if rooms.is_empty() {
        return None;
    }
    let Some(current) = selected else {
        return Some(rooms[0].id);
    };
    let index = rooms.iter().position(|r| r.id == current)?;
    let target = index as i32 + step;
    if target < 0 || target as usize >= rooms.len() {
        return None;
    }
    Some(rooms[target as usize].id)
}

/// Execute the side effect the reducer asked for. Returns true to quit.
///
/// Every spawned task reports back through `tx` as a new action; nothing here
/// blocks the event loop.
fn run_effect(
    effect: Effect,
    api: &Arc<dyn ChatApi>,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => {}

        Effect::Login { username, password } => {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.login(&username, &password).await.map(|token| {
                    let session = Session { username, token };
                    // Persist immediately so a crash after login stays
                    // logged in.
                    if let Err(e) = session::save_session(&session) {
                        warn!("Failed to persist session: {}", e);
                    }
                    session
                });
                if tx.send(Action::LoginFinished(result)).is_err() {
                    warn!("Failed to deliver login result: receiver dropped");
                }
            });
        }

        Effect::FetchRooms { token } => {
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.chat_rooms(&token).await;
                if tx.send(Action::RoomsFetched(result)).is_err() {
                    warn!("Failed to deliver room list: receiver dropped");
                }
            });
        }

        Effect::FetchMessages { room_id } => {
            // Fresh room, fresh scroll position.
            tui.message_list.reset();
            spawn_fetch_messages(api, room_id, tx);
        }

        Effect::SendMessage { content, room_id } => {
            let message = NewMessage::compose(content, room_id);
            let api = api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.send_message(&message).await;
                let room_id = message.chat_room;
                if tx.send(Action::SendFinished { room_id, result }).is_err() {
                    warn!("Failed to deliver send result: receiver dropped");
                }
            });
        }

        Effect::SendCompleted { room_id } => {
            // The input survives failed sends; only success clears it. The
            // refetch keeps the scroll position (stick-to-bottom still holds).
            tui.input_box.clear();
            spawn_fetch_messages(api, room_id, tx);
        }

        Effect::Logout => {
            let tx = tx.clone();
            tokio::task::spawn_blocking(move || {
                if let Err(e) = session::clear_session() {
                    warn!("Failed to clear session file: {}", e);
                }
                // Log out locally even if the file removal failed.
                if tx.send(Action::LogoutFinished).is_err() {
                    warn!("Failed to deliver logout completion: receiver dropped");
                }
            });
        }

        Effect::Quit => return true,
    }
    false
}

fn spawn_fetch_messages(api: &Arc<dyn ChatApi>, room_id: i64, tx: &mpsc::Sender<Action>) {
    let api = api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = api.messages().await;
        if tx.send(Action::MessagesFetched { room_id, result }).is_err() {
            warn!("Failed to deliver messages: receiver dropped");
        }
    });
}
