//! HTML escaping.

/// Escape a string for insertion into HTML, replacing the five characters
/// that have special meaning for HTML interpreters with named entities.
/// Output is safe both as element text and inside double-quoted attribute
/// values. The single pass makes double-escaping impossible: an ampersand
/// introduced by a replacement is never revisited.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
