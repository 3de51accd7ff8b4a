//! CSV output writer.

use std::fs::File;

use crate::ParsedMessage;
use crate::error::Result;
use crate::output::OutputConfig;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: depends on [`OutputConfig`]
///   - Basic: `Sender`, `Content`
///   - With timestamps: `Timestamp`, `Sender`, `Content`
///   - With dates: `Date`, `Sender`, `Content`
/// - Encoding: UTF-8
pub fn write_csv(messages: &[ParsedMessage], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a CSV string (useful when no file is wanted).
pub fn to_csv(messages: &[ParsedMessage], config: &OutputConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }
    if config.include_dates {
        header.push("Date");
    }

    header.push("Sender");
    header.push("Content");

    header
}

/// Build CSV record for a single message.
fn build_record(msg: &ParsedMessage, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_timestamps {
        record.push(msg.timestamp.clone());
    }
    if config.include_dates {
        record.push(
            msg.date
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        );
    }

    record.push(msg.sender.clone());
    record.push(msg.content.clone());

    record
}
