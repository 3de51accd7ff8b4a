//! JSON array output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::ParsedMessage;
use crate::error::Result;
use crate::output::OutputConfig;

/// Message structure for JSON output.
/// Only includes fields enabled in [`OutputConfig`].
#[derive(Serialize)]
struct JsonMessage {
    sender: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
}

impl JsonMessage {
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

/// Writes messages to a pretty-printed JSON array.
pub fn write_json(
    messages: &[ParsedMessage],
    output_path: &str,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    let json = to_json(messages, config)?;
    writer.write_all(json.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a pretty-printed JSON array string.
pub fn to_json(messages: &[ParsedMessage], config: &OutputConfig) -> Result<String> {
    let json_messages: Vec<JsonMessage> = messages
        .iter()
        .map(|msg| JsonMessage::from_parsed(msg, config))
        .collect();

    Ok(serde_json::to_string_pretty(&json_messages)?)
}
