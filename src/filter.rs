//! Filter parsed messages by date range and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering message collections after a parse.
//!
//! The parser's own target-sender mode
//! ([`parse_for_sender`](crate::ChatExportParser::parse_for_sender)) is an
//! exact, case-sensitive match applied during parsing; the sender filter
//! here is a looser, case-insensitive post-parse convenience.
//!
//! # Examples
//!
//! ## Filter by Sender
//!
//! ```
//! use chatsift::filter::{FilterConfig, apply_filters};
//! use chatsift::ParsedMessage;
//!
//! let messages = vec![
//!     ParsedMessage::new("Alice", "Hello there", "1/1/2024, 10:00:00"),
//!     ParsedMessage::new("Bob", "Hi Alice!", "1/1/2024, 10:01:00"),
//! ];
//!
//! let config = FilterConfig::new().with_sender("alice");
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! ```
//!
//! # Behavior Notes
//!
//! - Messages without a normalized date are **excluded** when date filters
//!   are active
//! - Sender matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use chrono::{DateTime, NaiveDate, Utc};

use crate::ParsedMessage;
use crate::error::ChatsiftError;

/// Configuration for filtering messages by date and sender.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatsift::filter::FilterConfig;
///
/// # fn main() -> chatsift::Result<()> {
/// let config = FilterConfig::new()
///     .with_sender("Alice")
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only messages on or before this timestamp.
    pub before: Option<DateTime<Utc>>,

    /// Include only messages from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatsiftError> {
        let naive = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| ChatsiftError::invalid_date(date_str))?;

        // Start of the day
        self.after = Some(naive.and_hms_opt(0, 0, 0).unwrap().and_utc());
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatsiftError> {
        let naive = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| ChatsiftError::invalid_date(date_str))?;

        // End of the day to include the full day
        self.before = Some(naive.and_hms_opt(23, 59, 59).unwrap().and_utc());
        Ok(self)
    }

    /// Sets the sender filter (case-insensitive for ASCII characters).
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Sets the start timestamp directly from a parsed [`DateTime`].
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly from a parsed [`DateTime`].
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the sender filter is active.
    pub fn has_sender_filter(&self) -> bool {
        self.from.is_some()
    }
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns a new vector containing only messages that match all active
/// filters. If no filters are active, returns the input unchanged.
///
/// # Filter Behavior
///
/// - **Sender filter**: Case-insensitive ASCII matching
/// - **Date filters**: Messages without a normalized date are excluded
/// - **Multiple filters**: Combined with AND logic
///
/// # Examples
///
/// ```
/// use chatsift::filter::{FilterConfig, apply_filters};
/// use chatsift::ParsedMessage;
///
/// let messages = vec![
///     ParsedMessage::new("Alice", "Hello there", "1/1/2024, 10:00:00"),
///     ParsedMessage::new("Bob", "Hi everyone", "1/1/2024, 10:01:00"),
/// ];
///
/// let config = FilterConfig::new().with_sender("Alice");
/// let filtered = apply_filters(messages, &config);
///
/// assert!(filtered.iter().all(|m| m.sender() == "Alice"));
/// ```
pub fn apply_filters(messages: Vec<ParsedMessage>, config: &FilterConfig) -> Vec<ParsedMessage> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| {
            if let Some(ref from) = config.from {
                if !msg.sender.eq_ignore_ascii_case(from) {
                    return false;
                }
            }

            if config.has_date_filter() {
                match msg.date {
                    Some(date) => {
                        if config.after.is_some_and(|after| date < after) {
                            return false;
                        }
                        if config.before.is_some_and(|before| date > before) {
                            return false;
                        }
                    }
                    None => {
                        // No normalized date - exclude from date-filtered results
                        return false;
                    }
                }
            }

            true
        })
        .collect()
}
