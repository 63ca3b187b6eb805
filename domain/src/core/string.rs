//! String utilities for the domain layer.

/// Truncate a string to a maximum number of characters with ellipsis.
///
/// Counts characters, not bytes, so multibyte text (Japanese report
/// excerpts in particular) is never cut mid-character.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

/// Extract the JSON body from raw model text.
///
/// Preference order:
/// 1. A fenced block explicitly tagged ` ```json `
/// 2. The first unlabeled fenced block
/// 3. The whole text, trimmed
///
/// This only strips fencing; the caller is responsible for parsing and for
/// treating a parse failure as a malformed response.
pub fn extract_json_block(text: &str) -> &str {
    if let Some(block) = fenced_block(text, "```json") {
        return block;
    }
    if let Some(block) = fenced_block(text, "```") {
        return block;
    }
    text.trim()
}

fn fenced_block<'a>(text: &'a str, fence: &str) -> Option<&'a str> {
    let start = text.find(fence)? + fence.len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}
