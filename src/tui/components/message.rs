use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::api::{self, Message as ApiMessage};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
pub const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
pub const VERTICAL_OVERHEAD: u16 = 2;
/// Extra row for the timestamp line under the content.
const TIMESTAMP_ROW: u16 = 1;

/// A stateless component that renders a single chat message bubble.
///
/// # Design
///
/// `MessageBubble` is a **transient component**: created fresh each frame
/// with the data it needs. Alignment is decided by the parent from
/// [`is_sent`]; the bubble itself only styles and draws.
///
/// # Styling
///
/// - **Sent** (cyan, right-aligned by the parent): messages whose `sender`
///   equals the fixed client sender id - see `api::SELF_SENDER_ID`.
/// - **Received** (gray, left-aligned): everything else.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height
/// using `textwrap` with options that match Ratatui's `Paragraph` wrapping.
/// This lets the parent `MessageList` lay out the scroll view without
/// rendering first.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a ApiMessage,
}

/// Whether a message renders as "sent" (right-aligned). Tied to the fixed
/// sender id the server expects on outgoing messages.
pub fn is_sent(message: &ApiMessage) -> bool {
    message.sender == api::SELF_SENDER_ID
}

/// Timestamp for display: local wall-clock time if the ISO-8601 string
/// parses, the raw string otherwise.
pub fn format_timestamp(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a ApiMessage) -> Self {
        Self { message }
    }

    /// Calculate the height required for this bubble at the given width.
    ///
    /// The wrapping options must match the Ratatui default for `Paragraph`
    /// to keep a 1:1 mapping between calculated and actual height.
    pub fn calculate_height(message: &ApiMessage, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let content = message.content.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD + TIMESTAMP_ROW;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + TIMESTAMP_ROW + VERTICAL_OVERHEAD
    }
}

impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let sent = is_sent(self.message);

        let style = if sent {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let border_style = style.add_modifier(Modifier::DIM);

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let mut text = ratatui::text::Text::from(self.message.content.trim());
        text.push_line(ratatui::text::Line::styled(
            format_timestamp(&self.message.timestamp),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));

        Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}
