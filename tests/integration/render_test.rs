//! Render integration tests
//!
//! Elements built through the `E` façade, checked against canonical markup.

use pretty_assertions::assert_eq;
use xfmarkup::shared::element::{AttrValue, At, Image, ResourcePayload};
use xfmarkup::shared::{render_all, Element, E};

#[test]
fn test_render_broadcast_mention() {
    assert_eq!(E::all(false).render(), r#"<at type="all" />"#);
}

#[test]
fn test_render_bold() {
    assert_eq!(E::bold("hi").render(), "<b>hi</b>");
}

#[test]
fn test_attribute_value_forms() {
    let mut at = Element::At(At::user("1"));
    at.insert_extension("pinned", true).unwrap();
    at.insert_extension("silent", false).unwrap();
    at.insert_extension("weight", 3).unwrap();
    at.insert_extension("label", "a \"b\" <c>").unwrap();
    at.insert_extension("_internal", "hidden").unwrap();
    at.insert_extension("gone", AttrValue::Null).unwrap();

    assert_eq!(
        at.render(),
        r#"<at id="1" pinned no-silent weight=3 label="a &quot;b&quot; &lt;c&gt;" />"#
    );
}

#[test]
fn test_render_text_escapes() {
    assert_eq!(E::text("1 < 2 & 3 > 2").render(), "1 &lt; 2 &amp; 3 &gt; 2");
}

#[test]
fn test_render_link_variants() {
    assert_eq!(E::link("https://x", None).render(), r#"<a href="https://x"/>"#);
    assert_eq!(E::link("https://x", Some("")).render(), r#"<a href="https://x"/>"#);
    assert_eq!(
        E::link("https://x", Some("site")).render(),
        r#"<a href="https://x">site</a>"#
    );
}

#[test]
fn test_render_image_with_size() {
    let image = Image::new(ResourcePayload::new("https://x/a.png")).with_size(10, 20);
    assert_eq!(
        Element::Image(image).render(),
        r#"<img src="https://x/a.png" width=10 height=20 />"#
    );
}

#[test]
fn test_render_quote_with_author() {
    let quote = E::quote(
        Some("q1"),
        false,
        vec![E::author("u1", Some("kim"), None), E::text("earlier")],
    );
    assert_eq!(
        quote.render(),
        r#"<quote id="q1"><author id="u1" nickname="kim" />earlier</quote>"#
    );
}

#[test]
fn test_render_all_has_no_separators() {
    let elements = vec![E::text("a"), E::br(), E::code("b"), E::raw("<x/>")];
    assert_eq!(render_all(&elements), "a<br/><code>b</code><x/>");
}

#[test]
fn test_style_extensions_are_not_rendered() {
    let mut bold = E::bold("hi");
    bold.insert_extension("color", "red").unwrap();
    assert_eq!(bold.extensions().get("color"), Some(&AttrValue::from("red")));
    assert_eq!(bold.render(), "<b>hi</b>");
}
