//! Generic node fixtures
//!
//! Builders for the node shapes a markup parser produces.

use xfmarkup::shared::GenericNode;

/// A style node wrapping a single text child, e.g. `<b>hi</b>`
pub fn styled(tag: &str, text: &str) -> GenericNode {
    GenericNode::new(tag).child(GenericNode::text(text))
}

/// An anchor node with an optional text child
pub fn anchor(href: &str, display: Option<&str>) -> GenericNode {
    let node = GenericNode::new("a").attr("href", href);
    match display {
        Some(display) => node.child(GenericNode::text(display)),
        None => node,
    }
}

/// A representative chat message: text, a mention, a styled run, a break
/// and an unknown emoji tag
pub fn sample_message() -> Vec<GenericNode> {
    vec![
        GenericNode::text("hello "),
        GenericNode::new("at").attr("id", "42").attr("name", "kim"),
        GenericNode::text(", "),
        styled("strong", "welcome"),
        GenericNode::new("br"),
        GenericNode::new("face").attr("id", 7).attr("large", true),
    ]
}

/// The canonical markup of `sample_message`
pub const SAMPLE_MESSAGE_MARKUP: &str =
    r#"hello <at id="42" name="kim" />, <b>welcome</b><br/><face id=7 large />"#;
