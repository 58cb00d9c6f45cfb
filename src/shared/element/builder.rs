//! Convenience constructors
//!
//! `E` is an uninhabited namespace: it cannot be instantiated, it only groups
//! shorthand constructors for every element variant.
//!
//! ```rust,ignore
//! let content = vec![
//!     E::text("see "),
//!     E::link("https://example.com", Some("here")),
//!     E::br(),
//!     E::image(ResourceOptions::new().url("https://example.com/a.png"))?,
//! ];
//! ```

use super::attr::AttrMap;
use super::resource::{ResourceKind, ResourceOptions};
use super::style::StylePayload;
use super::{At, Author, Custom, Element, Link, MessagePayload, Raw, Sharp, Text};
use crate::shared::error::ElementError;

/// Shorthand element constructors
pub enum E {}

impl E {
    pub fn text(text: impl Into<String>) -> Element {
        Element::Text(Text::new(text))
    }

    pub fn at(id: impl Into<String>) -> Element {
        Element::At(At::user(id))
    }

    pub fn at_role(role: impl Into<String>, name: Option<&str>) -> Element {
        Element::At(At::role(role, name.map(str::to_string)))
    }

    /// `here` selects online members only
    pub fn all(here: bool) -> Element {
        Element::At(At::all(here))
    }

    pub fn sharp(id: impl Into<String>, name: Option<&str>) -> Element {
        Element::Sharp(Sharp::new(id, name.map(str::to_string)))
    }

    pub fn link(url: impl Into<String>, display: Option<&str>) -> Element {
        Element::Link(Link::new(url, display.map(str::to_string)))
    }

    pub fn image(options: ResourceOptions) -> Result<Element, ElementError> {
        options.build(ResourceKind::Image)
    }

    pub fn audio(options: ResourceOptions) -> Result<Element, ElementError> {
        options.build(ResourceKind::Audio)
    }

    pub fn video(options: ResourceOptions) -> Result<Element, ElementError> {
        options.build(ResourceKind::Video)
    }

    pub fn file(options: ResourceOptions) -> Result<Element, ElementError> {
        options.build(ResourceKind::File)
    }

    pub fn bold(text: impl Into<String>) -> Element {
        Element::Bold(StylePayload::new(text))
    }

    pub fn italic(text: impl Into<String>) -> Element {
        Element::Italic(StylePayload::new(text))
    }

    pub fn underline(text: impl Into<String>) -> Element {
        Element::Underline(StylePayload::new(text))
    }

    pub fn strikethrough(text: impl Into<String>) -> Element {
        Element::Strikethrough(StylePayload::new(text))
    }

    pub fn spoiler(text: impl Into<String>) -> Element {
        Element::Spoiler(StylePayload::new(text))
    }

    pub fn code(text: impl Into<String>) -> Element {
        Element::Code(StylePayload::new(text))
    }

    pub fn sup(text: impl Into<String>) -> Element {
        Element::Superscript(StylePayload::new(text))
    }

    pub fn sub(text: impl Into<String>) -> Element {
        Element::Subscript(StylePayload::new(text))
    }

    pub fn br() -> Element {
        Element::Br(StylePayload::line_break())
    }

    pub fn paragraph(text: impl Into<String>) -> Element {
        Element::Paragraph(StylePayload::new(text))
    }

    pub fn message(id: Option<&str>, forward: bool, content: Vec<Element>) -> Element {
        Element::Message(message_payload(id, forward, content))
    }

    pub fn quote(id: Option<&str>, forward: bool, content: Vec<Element>) -> Element {
        Element::Quote(message_payload(id, forward, content))
    }

    pub fn author(id: impl Into<String>, nickname: Option<&str>, avatar: Option<&str>) -> Element {
        Element::Author(Author {
            nickname: nickname.map(str::to_string),
            avatar: avatar.map(str::to_string),
            ..Author::new(id)
        })
    }

    pub fn custom(tag: impl Into<String>, attrs: AttrMap, children: Vec<Element>) -> Element {
        Element::Custom(Custom::new(tag, attrs, children))
    }

    pub fn raw(content: impl Into<String>) -> Element {
        Element::Raw(Raw::new(content))
    }
}

fn message_payload(id: Option<&str>, forward: bool, content: Vec<Element>) -> MessagePayload {
    MessagePayload {
        id: id.map(str::to_string),
        forward: forward.then_some(true),
        ..MessagePayload::new(content)
    }
}
