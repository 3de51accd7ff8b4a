//! The structured message type produced by the parser.
//!
//! This module provides [`ParsedMessage`], the normalized output unit of a
//! chat-export parse. Every surviving transcript line becomes one of these.
//!
//! # Overview
//!
//! A parsed message consists of:
//! - **Required**: `sender`, `content`, and the raw `timestamp` substring
//! - **Optional**: `date`, the normalized point in time
//!
//! The raw timestamp is kept verbatim because it is what the user saw in
//! their export; `date` is derived from it on a best-effort basis and is
//! absent (not an error) when the timestamp has malformed numeric fields.
//!
//! # Examples
//!
//! ```
//! use chatsift::ParsedMessage;
//!
//! let msg = ParsedMessage::new("Mom", "Call me when you can", "1/2/24, 09:18:00 AM");
//! assert_eq!(msg.sender(), "Mom");
//! assert!(msg.date().is_none());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatsift::ParsedMessage;
//!
//! let msg = ParsedMessage::new("Alice", "Hello!", "1/2/24, 09:15:00 AM");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: ParsedMessage = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single attributable message extracted from a chat export.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Display name before the first colon of the line |
/// | `content` | `String` | Message body, trimmed |
/// | `timestamp` | `String` | Raw `"date, time"` substring, never reformatted |
/// | `date` | `Option<DateTime<Utc>>` | Normalized timestamp, when derivable |
///
/// # Invariants
///
/// The parser only emits messages with a non-empty `sender` and a `content`
/// that meets the configured minimum length. Constructing a `ParsedMessage`
/// directly does not enforce these; they are parse-time guarantees.
///
/// # Serialization
///
/// Implements `Serialize`/`Deserialize`; `date` is omitted from JSON when
/// `None` and rendered as RFC 3339 otherwise, suitable for JSONL ingestion
/// into RAG pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Display name of the message author, exactly as exported.
    pub sender: String,

    /// Text content of the message, trimmed of surrounding whitespace.
    ///
    /// May contain newlines when the parser is configured to append
    /// continuation lines.
    pub content: String,

    /// The original date/time substring from the export header,
    /// e.g. `"1/2/24, 09:15:00 AM"`. Kept verbatim for display.
    pub timestamp: String,

    /// Normalized point in time derived from `timestamp`.
    ///
    /// `None` when the timestamp's numeric fields or period marker were
    /// malformed; such messages are still valid output.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl ParsedMessage {
    /// Creates a message with no normalized date.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsift::ParsedMessage;
    ///
    /// let msg = ParsedMessage::new("Alice", "Hello!", "1/2/24, 09:15:00 AM");
    /// assert_eq!(msg.content(), "Hello!");
    /// assert!(msg.date().is_none());
    /// ```
    pub fn new(
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp: timestamp.into(),
            date: None,
        }
    }

    /// Builder method to attach the normalized date.
    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the raw timestamp substring.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Returns the normalized date, if one could be derived.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Returns the date portion of the raw timestamp (everything before the
    /// first comma), used for human-readable range displays.
    ///
    /// ```rust
    /// use chatsift::ParsedMessage;
    ///
    /// let msg = ParsedMessage::new("Alice", "Hi there", "12/1/2023, 10:30:00 AM");
    /// assert_eq!(msg.date_portion(), "12/1/2023");
    /// ```
    pub fn date_portion(&self) -> &str {
        self.timestamp
            .split_once(',')
            .map_or(self.timestamp.as_str(), |(date, _)| date)
            .trim()
    }

    /// Returns `true` if this message's content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
