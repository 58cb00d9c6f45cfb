//! Markup escaping
//!
//! Encodes the reserved markup characters in text and attribute-value
//! positions. Every renderer in `shared::element` routes user-provided strings
//! through [`escape`]; only `Raw` bypasses it.

use std::borrow::Cow;

/// Escape `&`, `<`, `>` and `"` for use in markup text or a quoted attribute.
///
/// Returns the input unchanged (borrowed) when it contains nothing to escape.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
