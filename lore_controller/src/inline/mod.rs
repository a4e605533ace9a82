//! Inline flag markers embedded in story text, e.g. `{{set_flag: met_wolf}}`.

/// Marker keyword used when none is configured.
pub const DEFAULT_MARKER: &str = "set_flag";

/// Characters allowed in a flag name inside a marker.
fn is_flag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Find every `{{<marker>: <name>}}` in `text` and return the names in order.
///
/// Whitespace is allowed after the colon only. A candidate that is not closed
/// by `}}` right after the name is skipped.
pub fn extract_inline_flags_with(text: &str, marker: &str) -> Vec<String> {
    let opening = format!("{{{{{}:", marker);
    let mut names = Vec::new();

    for (start, _) in text.match_indices(&opening) {
        let rest = text[start + opening.len()..].trim_start();
        let name_len = rest
            .char_indices()
            .find(|(_, c)| !is_flag_char(*c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        if name_len == 0 || !rest[name_len..].starts_with("}}") {
            continue;
        }

        names.push(rest[..name_len].to_string());
    }

    names
}

/// [`extract_inline_flags_with`] using the `set_flag` marker.
pub fn extract_inline_flags(text: &str) -> Vec<String> {
    extract_inline_flags_with(text, DEFAULT_MARKER)
}
