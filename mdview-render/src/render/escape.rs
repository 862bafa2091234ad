//! Entity escaping for text and attribute positions.

/// Escape the three characters that are reserved in HTML text content.
///
/// `&` is replaced first so the entities produced for `<` and `>` are not
/// escaped a second time.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
