//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options for the CLI
//!
//! The CLI [`OutputFormat`] mirrors the library's
//! [`format::OutputFormat`](crate::format::OutputFormat) and converts into it,
//! keeping clap's `ValueEnum` derive out of library code.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Sift a WhatsApp chat export into clean, structured messages
/// ready for AI persona ingestion.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift whatsapp_chat.txt
    chatsift chat.txt -o sifted.csv
    chatsift chat.txt --from \"Mom\" --format jsonl
    chatsift chat.txt --after 2024-01-01 --before 2024-12-31
    chatsift chat.txt --report")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = "sifted_chat.csv")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Keep only messages from this sender (exact match, case-sensitive)
    #[arg(long, value_name = "SENDER")]
    pub from: Option<String>,

    /// Filter messages after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Filter messages before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Include raw timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include normalized dates in output
    #[arg(short = 'd', long)]
    pub dates: bool,

    /// Disable merging consecutive messages from same sender
    #[arg(long)]
    pub no_merge: bool,

    /// Print a transcript report (participants, date range, preview)
    #[arg(long)]
    pub report: bool,

    /// Append unmatched lines to the previous message instead of dropping them
    #[arg(long)]
    pub keep_unmatched: bool,

    /// Minimum message length in characters; shorter messages are dropped
    #[arg(long, default_value_t = 4, value_name = "CHARS")]
    pub min_len: usize,
}

/// Output format options.
///
/// Different formats serve different purposes:
/// - [`Csv`](OutputFormat::Csv) - Best for LLM context
/// - [`Json`](OutputFormat::Json) - Structured array, good for APIs
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON per line, ideal for embedding/RAG
///
/// # Example
///
/// ```rust
/// use chatsift::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// println!("Extension: {}", format.extension()); // "jsonl"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default, best for LLMs)
    #[default]
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line (ideal for ML/RAG)
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
