//! Character-based text helpers
//!
//! Lengths are counted in Unicode scalar values, never bytes, so a cut can
//! land mid-word but never inside a UTF-8 sequence.

/// Marker appended to truncated previews
pub const ELLIPSIS: &str = "...";

/// Return the first `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build a content preview: the first `max_chars` characters followed by
/// `...` when the text is longer, otherwise the full text.
pub fn preview(text: &str, max_chars: usize) -> String {
    let head = truncate_chars(text, max_chars);
    if head.len() < text.len() {
        format!("{}{}", head, ELLIPSIS)
    } else {
        text.to_string()
    }
}
