//! Inline style wrappers
//!
//! Bold, italic, underline, strikethrough, spoiler, code, superscript,
//! subscript, paragraph and line break all carry a single text payload and
//! render through a fixed `<tag>text</tag>` template.

use super::attr::AttrMap;
use super::Element;

pub(crate) const STYLE_FIELDS: &[&str] = &["text"];

/// Constructor for one style variant
pub(crate) type StyleConstructor = fn(StylePayload) -> Element;

/// Style tags and their aliases, in lookup order
pub(crate) const STYLE_TABLE: &[(&str, StyleConstructor)] = &[
    ("b", Element::Bold),
    ("strong", Element::Bold),
    ("i", Element::Italic),
    ("em", Element::Italic),
    ("u", Element::Underline),
    ("ins", Element::Underline),
    ("s", Element::Strikethrough),
    ("del", Element::Strikethrough),
    ("spl", Element::Spoiler),
    ("code", Element::Code),
    ("sup", Element::Superscript),
    ("sub", Element::Subscript),
    ("p", Element::Paragraph),
];

/// Tags producing a line break
pub(crate) const BREAK_TAGS: &[&str] = &["br", "newline"];

/// Payload shared by every style wrapper.
///
/// `extensions` is filled from input attributes but never rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StylePayload {
    pub text: String,
    pub extensions: AttrMap,
}

impl StylePayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extensions: AttrMap::new(),
        }
    }

    /// The payload of a line break
    pub fn line_break() -> Self {
        Self::new("\n")
    }
}

/// Look up the style constructor for a tag
pub(crate) fn style_for(tag: &str) -> Option<StyleConstructor> {
    STYLE_TABLE
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, constructor)| *constructor)
}
