//! Transform integration tests
//!
//! Generic nodes in, typed elements out, checked through their variants
//! and their canonical markup.

use crate::common::{anchor, sample_message, styled, SAMPLE_MESSAGE_MARKUP};
use crate::{assert_err, assert_ok};
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use xfmarkup::shared::element::{transform_json, transform_node, AttrMap, AttrValue, Custom, Link};
use xfmarkup::shared::{render_all, transform, Element, ElementError, GenericNode};

#[test]
fn test_transform_bold_from_text_child() {
    let elements = assert_ok!(transform(&[styled("b", "hi")]));
    assert_eq!(elements.len(), 1);
    match &elements[0] {
        Element::Bold(payload) => assert_eq!(payload.text, "hi"),
        other => panic!("Expected Bold, got {:?}", other),
    }
}

#[test]
fn test_transform_unknown_tag_is_custom() {
    let node = GenericNode::new("foo").attr("a", 1);
    let elements = assert_ok!(transform(&[node]));

    let mut attrs = AttrMap::new();
    attrs.insert("a".to_string(), AttrValue::from(1));
    assert_eq!(elements, vec![Element::Custom(Custom::new("foo", attrs, vec![]))]);
    assert_eq!(render_all(&elements), "<foo a=1 />");
}

#[test]
fn test_transform_anchor_without_display() {
    let elements = assert_ok!(transform(&[anchor("https://x", None)]));
    assert_eq!(elements, vec![Element::Link(Link::new("https://x", None))]);
    assert_eq!(render_all(&elements), r#"<a href="https://x"/>"#);
}

#[test]
fn test_transform_anchor_with_display() {
    let elements = assert_ok!(transform(&[anchor("https://x?a=1&b=2", Some("docs"))]));
    assert_eq!(
        render_all(&elements),
        r#"<a href="https://x?a=1&amp;b=2">docs</a>"#
    );
}

#[test]
fn test_strong_never_falls_back_to_custom() {
    let node = styled("strong", "loud").attr("class", "x");
    let element = assert_ok!(transform_node(&node));
    assert!(matches!(element, Element::Bold(_)), "got {:?}", element);
}

#[test]
fn test_style_aliases() {
    let nodes = vec![
        styled("em", "a"),
        styled("ins", "b"),
        styled("del", "c"),
        styled("spl", "d"),
        styled("sup", "e"),
        styled("sub", "f"),
        styled("p", "g"),
    ];
    let elements = assert_ok!(transform(&nodes));
    assert_eq!(
        render_all(&elements),
        "<i>a</i><u>b</u><s>c</s><spl>d</spl><sup>e</sup><sub>f</sub><p>g</p>"
    );
}

#[test]
fn test_transform_sample_message() {
    let elements = assert_ok!(transform(&sample_message()));
    assert_eq!(render_all(&elements), SAMPLE_MESSAGE_MARKUP);
}

#[test]
fn test_nested_message_keeps_child_order() {
    let node = GenericNode::new("message")
        .attr("id", "m1")
        .attr("forward", true)
        .with_children(vec![
            GenericNode::text("a"),
            styled("i", "b"),
            GenericNode::text("c"),
        ]);
    let elements = assert_ok!(transform(&[node]));
    assert_eq!(
        render_all(&elements),
        r#"<message id="m1" forward>a<i>b</i>c</message>"#
    );
}

#[test]
fn test_empty_message_self_closes() {
    let elements = assert_ok!(transform(&[GenericNode::new("message").attr("id", "m2")]));
    assert_eq!(render_all(&elements), r#"<message id="m2" />"#);
}

#[test]
fn test_anchor_without_href_aborts_list() {
    let nodes = vec![GenericNode::text("ok"), GenericNode::new("a")];
    assert_matches!(
        transform(&nodes),
        Err(ElementError::MissingAttribute { attribute, .. }) if attribute == "href"
    );
}

#[test]
fn test_style_without_child_fails() {
    assert_err!(
        transform_node(&GenericNode::new("b")),
        ElementError::MissingChild { .. }
    );
}

#[test]
fn test_transform_json() {
    let json = r#"[
        {"tag": "text", "attributes": {"text": "see "}},
        {"tag": "sharp", "attributes": {"id": "general"}},
        {"tag": "img", "attributes": {"src": "https://x/a.png", "width": 64, "height": "32"}}
    ]"#;
    let elements = assert_ok!(transform_json(json));
    assert_eq!(
        render_all(&elements),
        r#"see <sharp id="general" /><img src="https://x/a.png" width=64 height=32 />"#
    );
}

#[test]
fn test_transform_json_rejects_non_array() {
    assert_err!(
        transform_json(r#"{"tag": "b"}"#),
        ElementError::Serialization { .. }
    );
}

#[test]
fn test_vec_element_deserializes() {
    let json = r#"[
        {"tag": "newline"},
        {"tag": "code", "children": [{"tag": "text", "attributes": {"text": "x<y"}}]}
    ]"#;
    let elements: Vec<Element> = assert_ok!(serde_json::from_str(json));
    assert_eq!(render_all(&elements), "<br/><code>x&lt;y</code>");
}
