//! Configuration types for the parser.
//!
//! This module provides a clean configuration struct for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::{ContinuationMode, ParserConfig};
//! use chatsift::ChatExportParser;
//!
//! let config = ParserConfig::new()
//!     .with_min_content_chars(4)
//!     .with_continuations(ContinuationMode::Append);
//!
//! let parser = ChatExportParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// How to treat transcript lines that match no timestamp-header pattern.
///
/// A message with an embedded newline exports as one header line followed by
/// bare continuation lines. The shipped behavior of the upstream pipeline was
/// to drop those lines (truncating the message); appending them restores the
/// full body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContinuationMode {
    /// Drop unmatched lines entirely (default).
    #[default]
    Drop,

    /// Append unmatched lines to the previous message's content.
    ///
    /// Lines appearing before any parsed message are still dropped.
    Append,
}

/// Configuration for chat-export parsing.
///
/// # Example
///
/// ```rust
/// use chatsift::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_skip_system_notices(true)
///     .with_min_content_chars(4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Minimum content length in characters, after trimming (default: 4).
    ///
    /// Shorter messages ("ok", "Hi") carry no persona-relevant signal and
    /// are dropped as noise. This is a content-quality filter, not a
    /// parsing failure.
    pub min_content_chars: usize,

    /// Skip system notices such as media placeholders, the encryption
    /// banner, and deletion notices (default: true).
    pub skip_system_notices: bool,

    /// Treatment of lines matching no header pattern (default: drop).
    pub continuations: ContinuationMode,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_content_chars: 4,
            skip_system_notices: true,
            continuations: ContinuationMode::Drop,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum content length in characters.
    #[must_use]
    pub fn with_min_content_chars(mut self, min: usize) -> Self {
        self.min_content_chars = min;
        self
    }

    /// Sets whether to skip system notices.
    #[must_use]
    pub fn with_skip_system_notices(mut self, skip: bool) -> Self {
        self.skip_system_notices = skip;
        self
    }

    /// Sets the continuation-line treatment.
    #[must_use]
    pub fn with_continuations(mut self, mode: ContinuationMode) -> Self {
        self.continuations = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ParserConfig::default();
        assert_eq!(config.min_content_chars, 4);
        assert!(config.skip_system_notices);
        assert_eq!(config.continuations, ContinuationMode::Drop);
    }

    #[test]
    fn test_config_builder() {
        let config = ParserConfig::new()
            .with_min_content_chars(1)
            .with_skip_system_notices(false)
            .with_continuations(ContinuationMode::Append);

        assert_eq!(config.min_content_chars, 1);
        assert!(!config.skip_system_notices);
        assert_eq!(config.continuations, ContinuationMode::Append);
    }

    #[test]
    fn test_continuation_mode_serde() {
        let json = serde_json::to_string(&ContinuationMode::Append).unwrap();
        assert_eq!(json, "\"append\"");

        let parsed: ContinuationMode = serde_json::from_str("\"drop\"").unwrap();
        assert_eq!(parsed, ContinuationMode::Drop);
    }
}
