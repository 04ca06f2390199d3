//! Reply clean-up shared by the generation operations

/// Marker appended when text is cut short
pub const ELLIPSIS: &str = "...";

const JSON_FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Remove a surrounding markdown JSON code fence, if present
pub fn strip_code_fence(reply: &str) -> &str {
    let mut text = reply.trim();

    if let Some(rest) = text.strip_prefix(JSON_FENCE_OPEN) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(FENCE_CLOSE) {
        text = rest;
    }

    text.trim()
}

/// Keep at most `limit` whitespace-separated words
///
/// Words are re-joined with single spaces; `...` is appended when words were dropped.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() > limit {
        format!("{}{}", words[..limit].join(" "), ELLIPSIS)
    } else {
        words.join(" ")
    }
}

/// Keep at most `max_length` characters
///
/// When the text is longer, its last three kept characters become `...` so the
/// result is exactly `max_length` characters. Bounds below the marker length cut
/// without a marker.
pub fn truncate_chars(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let marker_len = ELLIPSIS.chars().count();
    if max_length < marker_len {
        return text.chars().take(max_length).collect();
    }

    let mut truncated: String = text.chars().take(max_length - marker_len).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// First `limit` characters, never splitting a UTF-8 sequence
pub(crate) fn take_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
