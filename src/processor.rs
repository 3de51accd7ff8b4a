//! Post-parse processing.
//!
//! Persona and RAG pipelines pay per token; merging adjacent messages from
//! the same sender cuts repeated headers without losing attribution.

use crate::ParsedMessage;

/// Merges consecutive messages from the same sender into single entries.
///
/// The merged entry keeps the first message's timestamp and date; bodies
/// are joined with newlines.
///
/// # Example
///
/// ```
/// use chatsift::processor::merge_consecutive;
/// use chatsift::ParsedMessage;
///
/// let messages = vec![
///     ParsedMessage::new("Alice", "Hi there", "1/1/2024, 10:00:00"),
///     ParsedMessage::new("Alice", "How are you?", "1/1/2024, 10:00:30"),
///     ParsedMessage::new("Bob", "Doing fine", "1/1/2024, 10:01:00"),
/// ];
///
/// let merged = merge_consecutive(messages);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].content, "Hi there\nHow are you?");
/// ```
pub fn merge_consecutive(messages: Vec<ParsedMessage>) -> Vec<ParsedMessage> {
    let mut merged: Vec<ParsedMessage> = Vec::new();

    for msg in messages {
        match merged.last_mut() {
            Some(last) if last.sender == msg.sender => {
                last.content.push('\n');
                last.content.push_str(&msg.content);
            }
            _ => {
                merged.push(msg);
            }
        }
    }

    merged
}

/// Statistics about a merge pass.
#[derive(Debug, Clone, Copy)]
pub struct ProcessingStats {
    pub original_count: usize,
    pub merged_count: usize,
}

impl ProcessingStats {
    /// Creates stats from before/after counts.
    pub fn new(original_count: usize, merged_count: usize) -> Self {
        Self {
            original_count,
            merged_count,
        }
    }

    /// Percentage of entries eliminated by merging.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        (1.0 - (self.merged_count as f64 / self.original_count as f64)) * 100.0
    }
}
