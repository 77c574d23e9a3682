use std::borrow::Cow;

/// Escape text for use in HTML content and attribute values.
///
/// Replaces `<`, `>`, `&`, `"` and `'` with entity references. When nothing
/// needs escaping the input is handed back unchanged, without allocating.
pub fn escape_html(content: &str) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in content.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '\'' => {
                entity_seen = true;
                result.push_str("&#x27;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '"' => {
                entity_seen = true;
                result.push_str("&quot;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        Cow::Borrowed(content)
    } else {
        result.into()
    }
}
