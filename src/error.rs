//! Unified error types for chatsift.
//!
//! This module provides a single [`ChatsiftError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! The parser surfaces exactly two hard failures of a whole parse call:
//! [`EmptyInput`](ChatsiftError::EmptyInput) and
//! [`NoMessagesFound`](ChatsiftError::NoMessagesFound). Everything else that
//! can go wrong on an individual transcript line (a malformed header, an
//! unparseable date, an empty sender) is handled locally by skipping that
//! line, never by abandoning the parse. A single corrupt line must not sink
//! a multi-thousand-line transcript, but a transcript that yields nothing
//! usable must be flagged so callers don't proceed with an empty result.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::ParsedMessage;
///
/// fn my_function() -> Result<Vec<ParsedMessage>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
///
/// Each variant contains enough context for an application to present an
/// actionable message without exposing parsing internals.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input was empty or contained only whitespace.
    ///
    /// Callers should present this as "the uploaded file is empty" and
    /// suggest re-exporting the chat.
    #[error("export is empty or contains only whitespace")]
    EmptyInput,

    /// The input had content but no messages survived parsing and filtering.
    ///
    /// Either the file is not a WhatsApp export, it uses an unrecognized
    /// format variant, or the requested sender never appears. The parser
    /// does not disambiguate these; `target` is carried so callers can.
    #[error("no messages found in export ({lines} lines scanned{})", target.as_deref().map(|t| format!(", sender filter: {t:?}")).unwrap_or_default())]
    NoMessagesFound {
        /// Number of non-blank lines that were scanned.
        lines: usize,
        /// The sender filter in effect, if any.
        target: Option<String>,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The requested output format is unknown or unavailable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates a no-messages-found error.
    pub fn no_messages(lines: usize, target: Option<&str>) -> Self {
        ChatsiftError::NoMessagesFound {
            lines,
            target: target.map(str::to_owned),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatsiftError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this is the empty-input failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ChatsiftError::EmptyInput)
    }

    /// Returns `true` if this is the no-messages-found failure.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatsiftError::NoMessagesFound { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatsiftError::InvalidDate { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatsiftError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
