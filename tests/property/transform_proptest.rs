//! Property-based tests for transform dispatch and the custom fallback

use proptest::prelude::*;
use xfmarkup::shared::element::AttrValue;
use xfmarkup::shared::escape::escape;
use xfmarkup::shared::{transform, Element, GenericNode};

fn attr_value() -> impl Strategy<Value = AttrValue> {
    prop_oneof![
        any::<bool>().prop_map(AttrValue::Bool),
        any::<i32>().prop_map(AttrValue::from),
        "[a-zA-Z0-9 <>&\"]{0,12}".prop_map(|s| AttrValue::from(s.as_str())),
    ]
}

fn custom_node() -> impl Strategy<Value = GenericNode> {
    (
        "x-[a-z]{1,6}",
        proptest::collection::vec(("[a-z]{1,6}", attr_value()), 0..5),
        proptest::collection::vec("[a-z ]{1,8}", 0..3),
    )
        .prop_map(|(tag, attrs, texts)| {
            let node = attrs
                .into_iter()
                .fold(GenericNode::new(tag), |node, (key, value)| node.attr(key, value));
            node.with_children(texts.into_iter().map(GenericNode::text).collect())
        })
}

proptest! {
    #[test]
    fn test_custom_preserves_attributes_and_children(node in custom_node()) {
        let elements = transform(std::slice::from_ref(&node)).unwrap();
        prop_assert_eq!(elements.len(), 1);
        match &elements[0] {
            Element::Custom(custom) => {
                prop_assert_eq!(&custom.tag, &node.tag);
                prop_assert_eq!(&custom.attrs, &node.attributes);
                prop_assert_eq!(custom.children.len(), node.children.len());
            }
            other => prop_assert!(false, "expected Custom, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_render_reproduces_node(node in custom_node()) {
        let elements = transform(std::slice::from_ref(&node)).unwrap();

        let attrs: String = node
            .attributes
            .iter()
            .map(|(key, value)| match value {
                AttrValue::Bool(true) => format!(" {}", key),
                AttrValue::Bool(false) => format!(" no-{}", key),
                AttrValue::Number(n) => format!(" {}={}", key, n),
                AttrValue::String(s) => format!(" {}=\"{}\"", key, escape(s)),
                AttrValue::Null => String::new(),
            })
            .collect();
        let texts: String = node
            .children
            .iter()
            .map(|child| child.attributes["text"].as_text().unwrap_or_default())
            .collect();
        let expected = if node.children.is_empty() {
            format!("<{}{} />", node.tag, attrs)
        } else {
            format!("<{}{}>{}</{}>", node.tag, attrs, texts, node.tag)
        };
        prop_assert_eq!(elements[0].render(), expected);
    }

    #[test]
    fn test_strong_always_yields_bold(
        text in "[a-z]{1,8}",
        attrs in proptest::collection::vec(("[a-z]{1,6}", attr_value()), 0..4),
    ) {
        let node = attrs
            .into_iter()
            .fold(GenericNode::new("strong"), |node, (key, value)| node.attr(key, value))
            .child(GenericNode::text(text.clone()));
        let elements = transform(&[node]).unwrap();
        match &elements[0] {
            Element::Bold(payload) => prop_assert_eq!(&payload.text, &text),
            other => prop_assert!(false, "expected Bold, got {:?}", other),
        }
    }
}
