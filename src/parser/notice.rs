//! System-notice detection.
//!
//! Exports interleave real messages with placeholder lines inserted by the
//! app itself: media placeholders ("export without media"), the end-to-end
//! encryption banner, and deletion notices. These carry no conversational
//! content and are excluded from output entirely, even when the line is
//! otherwise well-formed.

/// Phrases that mark a line as a system notice.
///
/// Matching is a case-insensitive substring check against the message
/// content, so both `<Media omitted>` and `image omitted` variants hit.
const NOTICE_MARKERS: [&str; 10] = [
    "media omitted",
    "image omitted",
    "video omitted",
    "audio omitted",
    "document omitted",
    "sticker omitted",
    "gif omitted",
    "messages and calls are end-to-end encrypted",
    "this message was deleted",
    "you deleted this message",
];

/// Returns `true` if the content is a system notice rather than a message.
///
/// # Example
///
/// ```rust
/// use chatsift::parser::is_system_notice;
///
/// assert!(is_system_notice("<Media omitted>"));
/// assert!(is_system_notice("This message was deleted"));
/// assert!(!is_system_notice("Good morning sweetheart!"));
/// ```
pub fn is_system_notice(content: &str) -> bool {
    let content_lower = content.to_lowercase();
    NOTICE_MARKERS
        .iter()
        .any(|marker| content_lower.contains(marker))
}
