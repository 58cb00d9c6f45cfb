//! Property-based tests for escaping
//!
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;
use xfmarkup::shared::escape::escape;

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn test_escaped_text_has_no_markup_characters(text in ".*") {
        let escaped = escape(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
    }

    #[test]
    fn test_escape_is_reversible(text in ".*") {
        prop_assert_eq!(unescape(&escape(&text)), text);
    }

    #[test]
    fn test_plain_text_is_unchanged(text in "[a-zA-Z0-9 ,.!?]*") {
        let escaped = escape(&text);
        prop_assert_eq!(escaped.as_ref(), text.as_str());
    }
}
