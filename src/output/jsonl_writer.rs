//! JSON Lines (JSONL) output writer.
//!
//! JSONL is the natural handoff format for embedding pipelines: one message
//! per line, each line independently parseable.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::ParsedMessage;
use crate::error::Result;
use crate::output::OutputConfig;

/// Minimal message structure for JSONL output.
/// Only includes fields enabled in [`OutputConfig`].
#[derive(Serialize)]
struct JsonlMessage {
    sender: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
}

impl JsonlMessage {
    fn from_parsed(msg: &ParsedMessage, config: &OutputConfig) -> Self {
        Self {
            sender: msg.sender.clone(),
            content: msg.content.clone(),
            timestamp: config.include_timestamps.then(|| msg.timestamp.clone()),
            date: if config.include_dates {
                msg.date.map(|d| d.format("%Y-%m-%dT%H:%M:%SZ").to_string())
            } else {
                None
            },
        }
    }
}

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"sender":"Alice","content":"Hello"}
/// {"sender":"Bob","content":"Hi"}
/// ```
pub fn write_jsonl(
    messages: &[ParsedMessage],
    output_path: &str,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in messages {
        let json_msg = JsonlMessage::from_parsed(msg, config);
        let line = serde_json::to_string(&json_msg)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[ParsedMessage], config: &OutputConfig) -> Result<String> {
    let mut out = String::new();
    for msg in messages {
        let json_msg = JsonlMessage::from_parsed(msg, config);
        out.push_str(&serde_json::to_string(&json_msg)?);
        out.push('\n');
    }
    Ok(out)
}
