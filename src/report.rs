//! Aggregate parse report.
//!
//! [`ParseReport`] is the "full report" result of a parse: the retained
//! message list plus the summary a caller shows before committing to
//! ingestion (participant discovery, date span, a short preview).

use serde::Serialize;

use crate::ParsedMessage;

/// Number of messages included in the preview.
pub const PREVIEW_MESSAGES: usize = 5;

/// Maximum preview snippet length in characters.
pub const PREVIEW_CONTENT_CHARS: usize = 100;

/// Summary and contents of a successful parse.
///
/// Produced by [`ChatExportParser::parse_report`](crate::ChatExportParser::parse_report).
/// A report always describes at least one message; a parse that retains
/// nothing fails with
/// [`NoMessagesFound`](crate::ChatsiftError::NoMessagesFound) instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReport {
    /// Count of retained messages.
    pub total_messages: usize,

    /// Human-readable span built from the raw date portions of the first
    /// and last message in output order, e.g. `"12/1/2023 - 3/15/2024"`.
    pub date_range: String,

    /// Deduplicated senders across the whole conversation, in order of
    /// first appearance. Collected before any target-sender filter, so a
    /// filtered parse still reports the full cast.
    pub participants: Vec<String>,

    /// First [`PREVIEW_MESSAGES`] retained messages, each rendered as
    /// `"{sender}: {snippet}"` with the snippet truncated to
    /// [`PREVIEW_CONTENT_CHARS`] characters plus `...`.
    pub preview: Vec<String>,

    /// The full retained, ordered message list.
    pub messages: Vec<ParsedMessage>,
}

impl ParseReport {
    /// Assembles a report from an already ordered message list.
    pub(crate) fn build(messages: Vec<ParsedMessage>, participants: Vec<String>) -> Self {
        let date_range = match (messages.first(), messages.last()) {
            (Some(first), Some(last)) => {
                format!("{} - {}", first.date_portion(), last.date_portion())
            }
            _ => String::new(),
        };

        let preview = messages
            .iter()
            .take(PREVIEW_MESSAGES)
            .map(preview_line)
            .collect();

        Self {
            total_messages: messages.len(),
            date_range,
            participants,
            preview,
            messages,
        }
    }
}

/// Renders one preview entry, truncating on a character boundary.
fn preview_line(msg: &ParsedMessage) -> String {
    let snippet: String = msg.content.chars().take(PREVIEW_CONTENT_CHARS).collect();
    if msg.content.chars().count() > PREVIEW_CONTENT_CHARS {
        format!("{}: {}...", msg.sender, snippet)
    } else {
        format!("{}: {}", msg.sender, snippet)
    }
}
