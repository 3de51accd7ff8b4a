//! # Chatsift
//!
//! A Rust library for sifting WhatsApp chat exports into clean, structured,
//! time-ordered messages ready for AI persona and RAG ingestion.
//!
//! ## Overview
//!
//! A chat application's "export chat" feature produces a plain-text
//! transcript whose line format varies by platform and locale. Chatsift
//! turns that raw text into attributable [`ParsedMessage`] values:
//!
//! - recognizes bracketed (iOS-style) and dash-separated (Android-style)
//!   timestamp headers, with and without 12-hour markers
//! - drops system notices (media placeholders, the encryption banner,
//!   deletion notices) and noise messages below a length threshold
//! - normalizes timestamps on a best-effort basis and orders the output
//!   chronologically
//! - can isolate a single participant while still reporting the full cast
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsift::ChatExportParser;
//!
//! fn main() -> chatsift::Result<()> {
//!     let export = "\
//! [1/2/24, 09:15:00 AM] Mom: Good morning sweetheart!
//! [1/2/24, 09:18:00 AM] Mom: Call me when you can";
//!
//!     let parser = ChatExportParser::new();
//!
//!     // Everything, with a summary report
//!     let report = parser.parse_report(export, None)?;
//!     println!("{} messages from {:?}", report.total_messages, report.participants);
//!
//!     // Or just one participant's messages
//!     let messages = parser.parse_for_sender(export, "Mom")?;
//!     assert_eq!(messages.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ChatExportParser`], the recognized
//!   [`HeaderFormat`](parser::HeaderFormat)s, and system-notice detection
//! - [`message`] — [`ParsedMessage`], the structured output unit
//! - [`report`] — [`ParseReport`] (totals, date range, participants, preview)
//! - [`config`] — [`ParserConfig`](config::ParserConfig) parser settings
//! - [`filter`] — post-parse date-range and sender filtering
//! - [`processor`] — consecutive-message merging for token efficiency
//! - [`output`] — CSV/JSON/JSONL writers (feature-gated)
//! - [`format`] — [`OutputFormat`](format::OutputFormat) selection helpers
//! - [`error`] — [`ChatsiftError`], [`Result`]
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod processor;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsiftError, Result};
pub use message::ParsedMessage;
pub use parser::ChatExportParser;
pub use report::ParseReport;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{ChatExportParser, ParsedMessage, ParseReport};

    // Error types
    pub use crate::error::{ChatsiftError, Result};

    // Parser configuration
    pub use crate::config::{ContinuationMode, ParserConfig};

    // Header formats and notice detection
    pub use crate::parser::{HeaderFormat, is_system_notice};

    // Filtering
    pub use crate::filter::{FilterConfig, apply_filters};

    // Processing
    pub use crate::processor::{ProcessingStats, merge_consecutive};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::output::OutputConfig;

    // Format selection
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
