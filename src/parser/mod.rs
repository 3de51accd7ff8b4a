//! WhatsApp chat-export parser.
//!
//! This module provides [`ChatExportParser`], the single entry point for
//! turning raw export text into structured, time-ordered messages.
//!
//! # Example
//!
//! ```rust
//! use chatsift::ChatExportParser;
//!
//! # fn main() -> chatsift::Result<()> {
//! let export = "\
//! [1/2/24, 09:15:00 AM] Mom: Good morning sweetheart!
//! [1/2/24, 09:18:00 AM] Mom: Call me when you can";
//!
//! let parser = ChatExportParser::new();
//! let messages = parser.parse(export)?;
//! assert_eq!(messages.len(), 2);
//!
//! // Or isolate a single participant with a full report:
//! let report = parser.parse_report(export, Some("Mom"))?;
//! assert_eq!(report.participants, vec!["Mom"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Guarantees
//!
//! - Every emitted message has a non-empty sender and content meeting the
//!   configured minimum length.
//! - System notices never appear in output.
//! - The output is ordered: dated messages ascend chronologically
//!   (input-order tie-break); messages whose date failed to normalize come
//!   after all dated ones, in input order.
//! - A parse is a pure function of its inputs: no I/O, no shared state, and
//!   identical input always yields identical output. Concurrent calls need
//!   no coordination.

mod headers;
mod notice;

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use regex::{Captures, Regex};

use crate::ParsedMessage;
use crate::config::{ContinuationMode, ParserConfig};
use crate::error::{ChatsiftError, Result};
use crate::report::ParseReport;

pub use headers::HeaderFormat;
pub use notice::is_system_notice;

use headers::parse_date;

/// Parser for WhatsApp TXT exports.
///
/// Construction compiles one regex per recognized header format; reuse a
/// parser across calls rather than rebuilding it per transcript.
///
/// # Example
///
/// ```rust,no_run
/// use chatsift::ChatExportParser;
///
/// let parser = ChatExportParser::new();
/// let messages = parser.parse_file("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatsift::ChatsiftError>(())
/// ```
pub struct ChatExportParser {
    config: ParserConfig,
    formats: Vec<(HeaderFormat, Regex)>,
}

impl ChatExportParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        let formats = HeaderFormat::all()
            .iter()
            .map(|&format| (format, Regex::new(format.pattern()).unwrap()))
            .collect();
        Self { config, formats }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an export and returns every retained message.
    ///
    /// # Errors
    ///
    /// - [`ChatsiftError::EmptyInput`] when `raw` is empty or whitespace.
    /// - [`ChatsiftError::NoMessagesFound`] when nothing survives filtering.
    pub fn parse(&self, raw: &str) -> Result<Vec<ParsedMessage>> {
        Ok(self.parse_report(raw, None)?.messages)
    }

    /// Parses an export, keeping only messages from one participant.
    ///
    /// Matching is exact and case-sensitive: the trimmed sender must equal
    /// `target` byte-for-byte. No normalization is applied, so callers
    /// should pass the name exactly as it appears in the export.
    pub fn parse_for_sender(&self, raw: &str, target: &str) -> Result<Vec<ParsedMessage>> {
        Ok(self.parse_report(raw, Some(target))?.messages)
    }

    /// Reads a file and parses its contents.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<ParsedMessage>> {
        let content = fs::read_to_string(path)?;
        self.parse(&content)
    }

    /// Parses an export into a full [`ParseReport`].
    ///
    /// The report's `participants` list reflects the whole conversation:
    /// it is collected before the `target` filter narrows the message list,
    /// so a filtered call still discovers the full cast.
    pub fn parse_report(&self, raw: &str, target: Option<&str>) -> Result<ParseReport> {
        if raw.trim().is_empty() {
            return Err(ChatsiftError::EmptyInput);
        }

        let mut messages: Vec<ParsedMessage> = Vec::new();
        let mut participants: Vec<String> = Vec::new();
        let mut lines_scanned = 0usize;
        // Tracks whether the previous header line produced a message, so
        // continuation lines of a skipped message don't attach to an
        // earlier, unrelated one.
        let mut last_retained = false;

        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }
            lines_scanned += 1;

            let Some((format, caps)) = self.match_header(line) else {
                if self.config.continuations == ContinuationMode::Append && last_retained {
                    if let Some(last) = messages.last_mut() {
                        last.content.push('\n');
                        last.content.push_str(line.trim());
                    }
                }
                continue;
            };

            let parts = format.extract(&caps);
            let sender = parts.sender.trim();
            let content = parts.content.trim();

            if sender.is_empty() {
                last_retained = false;
                continue;
            }
            if self.config.skip_system_notices && is_system_notice(content) {
                last_retained = false;
                continue;
            }
            if content.chars().count() < self.config.min_content_chars {
                last_retained = false;
                continue;
            }

            if !participants.iter().any(|p| p == sender) {
                participants.push(sender.to_string());
            }

            if let Some(target) = target {
                if sender != target {
                    last_retained = false;
                    continue;
                }
            }

            let mut msg = ParsedMessage::new(sender, content, parts.raw_timestamp);
            msg.date = parse_date(parts.date_str, parts.time_str, parts.period);
            messages.push(msg);
            last_retained = true;
        }

        if messages.is_empty() {
            return Err(ChatsiftError::no_messages(lines_scanned, target));
        }

        sort_by_date(&mut messages);
        Ok(ParseReport::build(messages, participants))
    }

    /// Tries each header format in order, returning the first match.
    fn match_header<'t>(&self, line: &'t str) -> Option<(HeaderFormat, Captures<'t>)> {
        self.formats
            .iter()
            .find_map(|(format, regex)| regex.captures(line).map(|caps| (*format, caps)))
    }
}

impl Default for ChatExportParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorts messages into the documented total order: dated messages ascend by
/// date with input-order tie-break; undated messages follow, in input order.
///
/// All-dated input becomes chronological; all-undated input keeps line
/// order.
fn sort_by_date(messages: &mut Vec<ParsedMessage>) {
    let mut indexed: Vec<(usize, ParsedMessage)> = messages.drain(..).enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| match (a.date, b.date) {
        (Some(da), Some(db)) => da.cmp(&db).then(ia.cmp(ib)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => ia.cmp(ib),
    });
    messages.extend(indexed.into_iter().map(|(_, msg)| msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
[1/2/24, 09:15:00 AM] Mom: Good morning sweetheart!
[1/2/24, 09:16:03 AM] Mom: <Media omitted>
[1/2/24, 09:17:45 AM] Mom: Hi
[1/2/24, 09:18:00 AM] Mom: Call me when you can";

    #[test]
    fn test_parse_drops_notices_and_short_content() {
        let parser = ChatExportParser::new();
        let messages = parser.parse(EXPORT).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "Good morning sweetheart!");
        assert_eq!(messages[1].content, "Call me when you can");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = ChatExportParser::new();
        let first = parser.parse(EXPORT).unwrap();
        let second = parser.parse(EXPORT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let parser = ChatExportParser::new();
        assert!(parser.parse("").unwrap_err().is_empty_input());
        assert!(parser.parse("   \n  \n").unwrap_err().is_empty_input());
    }

    #[test]
    fn test_no_messages_found() {
        let parser = ChatExportParser::new();
        let err = parser
            .parse("just some text\nwith no headers at all")
            .unwrap_err();
        assert!(err.is_no_messages());
    }

    #[test]
    fn test_target_sender_absent_is_no_messages() {
        let parser = ChatExportParser::new();
        let err = parser.parse_for_sender(EXPORT, "Dad").unwrap_err();
        assert!(err.is_no_messages());
    }

    #[test]
    fn test_target_sender_exact_case_sensitive() {
        let parser = ChatExportParser::new();
        assert!(parser.parse_for_sender(EXPORT, "mom").is_err());
        let messages = parser.parse_for_sender(EXPORT, "Mom").unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_participants_collected_before_target_filter() {
        let export = "\
[1/2/24, 09:15:00 AM] Alice: Morning everyone
[1/2/24, 09:16:00 AM] Bob: Morning Alice!
[1/2/24, 09:17:00 AM] Alice: Coffee later?";
        let parser = ChatExportParser::new();
        let report = parser.parse_report(export, Some("Alice")).unwrap();
        assert_eq!(report.messages.len(), 2);
        assert_eq!(report.participants, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_sorting_is_chronological() {
        let export = "\
[1/3/2024, 10:00:00] Alice: March message here
[25/12/2023, 10:00:00] Alice: December message here";
        let parser = ChatExportParser::new();
        let messages = parser.parse(export).unwrap();
        assert_eq!(messages[0].content, "December message here");
        assert_eq!(messages[1].content, "March message here");
    }

    #[test]
    fn test_undated_messages_sort_last_in_input_order() {
        let export = "\
[1/3/2024, 10:00:00] Alice: dated message one
[99/99/99, 10:00:00] Alice: broken date first
[1/2/2024, 10:00:00] Alice: dated message two
[88/88/88, 10:00:00] Alice: broken date second";
        let parser = ChatExportParser::new();
        let messages = parser.parse(export).unwrap();
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec![
                "dated message two",
                "dated message one",
                "broken date first",
                "broken date second",
            ]
        );
        assert!(messages[2].date.is_none());
        assert!(messages[3].date.is_none());
    }

    #[test]
    fn test_mixed_format_transcript() {
        // Per-line matching keeps every parseable line even when the
        // transcript mixes export variants.
        let export = "\
[1/2/24, 09:15:00 AM] Alice: bracketed slash line
[15.01.24, 10:30:45] Bob: bracketed dot line
15/1/2024, 10:30 - Alice: dash separated line";
        let parser = ChatExportParser::new();
        let messages = parser.parse(export).unwrap();
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn test_continuation_lines_dropped_by_default() {
        let export = "\
[1/2/24, 09:15:00 AM] Alice: first physical line
and this continuation is dropped";
        let parser = ChatExportParser::new();
        let messages = parser.parse(export).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "first physical line");
    }

    #[test]
    fn test_continuation_lines_appended_when_configured() {
        let export = "\
[1/2/24, 09:15:00 AM] Alice: first physical line
and this continuation is kept";
        let config = ParserConfig::new().with_continuations(ContinuationMode::Append);
        let parser = ChatExportParser::with_config(config);
        let messages = parser.parse(export).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].content,
            "first physical line\nand this continuation is kept"
        );
    }

    #[test]
    fn test_continuation_of_skipped_message_not_attached() {
        // The continuation belongs to Bob's filtered-out message; it must
        // not leak into Alice's.
        let export = "\
[1/2/24, 09:15:00 AM] Alice: a message from alice
[1/2/24, 09:16:00 AM] Bob: a message from bob
orphaned continuation of bob";
        let config = ParserConfig::new().with_continuations(ContinuationMode::Append);
        let parser = ChatExportParser::with_config(config);
        let messages = parser.parse_for_sender(export, "Alice").unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "a message from alice");
    }

    #[test]
    fn test_bad_date_degrades_to_none() {
        let export = "[99/99/9999, 99:99:99] Alice: still a valid message";
        let parser = ChatExportParser::new();
        let messages = parser.parse(export).unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].date.is_none());
        assert_eq!(messages[0].timestamp, "99/99/9999, 99:99:99");
    }

    #[test]
    fn test_raw_timestamp_not_reformatted() {
        let parser = ChatExportParser::new();
        let messages = parser.parse(EXPORT).unwrap();
        assert_eq!(messages[0].timestamp, "1/2/24, 09:15:00 AM");
    }

    #[test]
    fn test_min_content_boundary() {
        let export = "\
[1/2/24, 09:15:00 AM] Alice: abc
[1/2/24, 09:16:00 AM] Alice: abcd";
        let parser = ChatExportParser::new();
        let messages = parser.parse(export).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "abcd");
    }

    #[test]
    fn test_crlf_input() {
        let export = "[1/2/24, 09:15:00 AM] Alice: hello there\r\n[1/2/24, 09:16:00 AM] Bob: hi back to you\r\n";
        let parser = ChatExportParser::new();
        let messages = parser.parse(export).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, "hi back to you");
    }
}
