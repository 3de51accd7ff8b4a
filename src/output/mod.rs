//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter (best for LLM context) - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one JSON per line, best for embedding pipelines) - requires `json-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Use Case |
//! |--------|----------|
//! | CSV | Pasting a conversation into LLM context |
//! | JSON | Structured data, APIs |
//! | JSONL | Embedding/RAG ingestion, streaming |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatsift::Result<()> {
//! use chatsift::output::{OutputConfig, write_csv, write_jsonl};
//! use chatsift::ParsedMessage;
//!
//! let messages = vec![
//!     ParsedMessage::new("Alice", "Hello!", "1/1/2024, 10:00:00"),
//! ];
//!
//! let config = OutputConfig::new().with_timestamps();
//! write_csv(&messages, "output.csv", &config)?;
//! write_jsonl(&messages, "output.jsonl", &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Controls which metadata columns the writers emit.
///
/// Sender and content are always written; the raw timestamp string and the
/// normalized date are opt-in.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include the raw timestamp substring in output.
    pub include_timestamps: bool,
    /// Include the normalized date (RFC 3339-ish) in output.
    pub include_dates: bool,
}

impl OutputConfig {
    /// Creates a configuration that writes sender and content only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include raw timestamps in output.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    /// Include normalized dates in output.
    #[must_use]
    pub fn with_dates(mut self) -> Self {
        self.include_dates = true;
        self
    }
}
