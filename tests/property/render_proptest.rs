//! Property-based tests for attribute rendering

use proptest::prelude::*;
use xfmarkup::shared::element::{AttrMap, AttrValue, Custom};
use xfmarkup::shared::escape::escape;
use xfmarkup::shared::Element;

fn single_attr(key: &str, value: AttrValue) -> String {
    let mut attrs = AttrMap::new();
    attrs.insert(key.to_string(), value);
    Element::Custom(Custom::new("x-node", attrs, vec![])).render()
}

proptest! {
    #[test]
    fn test_bool_attribute_forms(key in "[a-z][a-z0-9-]{0,8}", flag in any::<bool>()) {
        let expected = if flag {
            format!("<x-node {} />", key)
        } else {
            format!("<x-node no-{} />", key)
        };
        prop_assert_eq!(single_attr(&key, AttrValue::Bool(flag)), expected);
    }

    #[test]
    fn test_number_attribute_is_unquoted(key in "[a-z][a-z0-9-]{0,8}", n in any::<i64>()) {
        prop_assert_eq!(
            single_attr(&key, AttrValue::from(n)),
            format!("<x-node {}={} />", key, n)
        );
    }

    #[test]
    fn test_string_attribute_is_quoted_and_escaped(key in "[a-z][a-z0-9-]{0,8}", value in ".*") {
        prop_assert_eq!(
            single_attr(&key, AttrValue::from(value.as_str())),
            format!("<x-node {}=\"{}\" />", key, escape(&value))
        );
    }

    #[test]
    fn test_internal_keys_are_hidden(key in "_[a-z0-9]{0,8}", value in ".*") {
        prop_assert_eq!(single_attr(&key, AttrValue::from(value.as_str())), "<x-node />");
    }
}
