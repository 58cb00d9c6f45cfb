//! Message Element Tree
//!
//! Rich chat-message content is modelled as a tree of typed elements: plain
//! text, mentions, channel references, links, media resources, inline styles,
//! quotes, nested messages and unrecognised custom tags.
//!
//! # Overview
//!
//! - [`Element`] is a closed sum type. Shapes shared by several variants are
//!   factored into payload structs ([`ResourcePayload`], [`StylePayload`],
//!   [`MessagePayload`]) embedded by value.
//! - Rendering (`Display`) produces canonical markup, recursively.
//! - [`transform`] converts the generic attributed tree emitted by a markup
//!   parser into typed elements.
//! - [`E`] groups convenience constructors.
//!
//! # Markup
//!
//! ```text
//! <message id="1" forward><at id="42" /><b>hello</b></message>
//! ```
//!
//! # Extension attributes
//!
//! Attributes a variant does not declare are kept in its extension map.
//! Variants using the default renderer (`At`, `Sharp`, resources, `Author`)
//! emit them after their fixed fields; template renderers (`Text`, `Link`,
//! style wrappers, `Message`/`Quote`, `Raw`) keep them but never emit them.

pub mod attr;
pub mod builder;
pub mod resource;
pub mod style;
pub mod transform;

pub use attr::{AttrMap, AttrValue, INTERNAL_MARKER};
pub use builder::E;
pub use resource::{ExtraValue, Image, ResourceKind, ResourceOptions, ResourcePayload};
pub use style::StylePayload;
pub use transform::{transform, transform_json, transform_node, GenericNode};

use crate::shared::error::ElementError;
use crate::shared::escape::escape;
use attr::{write_attrs, RenderAttr};
use std::fmt;

/// Plain text; renders as escaped text without a wrapping tag
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub text: String,
    pub extensions: AttrMap,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extensions: AttrMap::new(),
        }
    }
}

/// A mention of a user, a role, or everyone
#[derive(Debug, Clone, PartialEq, Default)]
pub struct At {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    /// Rendered as `type`; `all` and `here` are broadcast mentions
    pub kind: Option<String>,
    pub extensions: AttrMap,
}

impl At {
    /// Mention a single user
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Mention every member of a role
    pub fn role(role: impl Into<String>, name: Option<String>) -> Self {
        Self {
            role: Some(role.into()),
            name,
            ..Self::default()
        }
    }

    /// Broadcast mention: `type="all"`, or `type="here"` for online members only
    pub fn all(here: bool) -> Self {
        Self {
            kind: Some(if here { "here" } else { "all" }.to_string()),
            ..Self::default()
        }
    }
}

/// A channel or topic reference
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sharp {
    pub id: String,
    pub name: Option<String>,
    pub extensions: AttrMap,
}

impl Sharp {
    pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
            extensions: AttrMap::new(),
        }
    }
}

/// An anchor; `display` is the visible text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Link {
    pub url: String,
    pub display: Option<String>,
    pub extensions: AttrMap,
}

impl Link {
    pub fn new(url: impl Into<String>, display: Option<String>) -> Self {
        Self {
            url: url.into(),
            display,
            extensions: AttrMap::new(),
        }
    }
}

/// Shape shared by `Message` and `Quote`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessagePayload {
    pub id: Option<String>,
    pub forward: Option<bool>,
    pub content: Vec<Element>,
    pub extensions: AttrMap,
}

impl MessagePayload {
    pub fn new(content: Vec<Element>) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn forwarded(mut self) -> Self {
        self.forward = Some(true);
        self
    }
}

/// Author override for a message
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Author {
    pub id: String,
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub extensions: AttrMap,
}

impl Author {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Catch-all for tags without a dedicated variant; preserves everything
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Custom {
    pub tag: String,
    pub attrs: AttrMap,
    pub children: Vec<Element>,
}

impl Custom {
    pub fn new(tag: impl Into<String>, attrs: AttrMap, children: Vec<Element>) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            children,
        }
    }
}

/// Pre-rendered markup, emitted verbatim without escaping
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Raw {
    pub content: String,
    pub extensions: AttrMap,
}

impl Raw {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            extensions: AttrMap::new(),
        }
    }
}

/// A typed node of message content
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(Text),
    At(At),
    Sharp(Sharp),
    Link(Link),
    Image(Image),
    Audio(ResourcePayload),
    Video(ResourcePayload),
    File(ResourcePayload),
    Bold(StylePayload),
    Italic(StylePayload),
    Underline(StylePayload),
    Strikethrough(StylePayload),
    Spoiler(StylePayload),
    Code(StylePayload),
    Superscript(StylePayload),
    Subscript(StylePayload),
    Paragraph(StylePayload),
    Br(StylePayload),
    Message(MessagePayload),
    Quote(MessagePayload),
    Author(Author),
    Custom(Custom),
    Raw(Raw),
}

const TEXT_FIELDS: &[&str] = &["text"];
const AT_FIELDS: &[&str] = &["id", "name", "role", "type"];
const SHARP_FIELDS: &[&str] = &["id", "name"];
const LINK_FIELDS: &[&str] = &["href", "url", "display"];
const RESOURCE_FIELDS: &[&str] = &["src", "cache", "timeout"];
const IMAGE_FIELDS: &[&str] = &["src", "cache", "timeout", "width", "height"];
const MESSAGE_FIELDS: &[&str] = &["id", "forward", "content"];
const AUTHOR_FIELDS: &[&str] = &["id", "nickname", "avatar"];
const RAW_FIELDS: &[&str] = &["content"];

impl Element {
    /// Tag name used for dispatch and rendering (`img` for images, the stored
    /// tag for `Custom`, the short style tag for style wrappers)
    pub fn tag_name(&self) -> &str {
        match self {
            Element::Text(_) => "text",
            Element::At(_) => "at",
            Element::Sharp(_) => "sharp",
            Element::Link(_) => "a",
            Element::Image(_) => ResourceKind::Image.tag_name(),
            Element::Audio(_) => ResourceKind::Audio.tag_name(),
            Element::Video(_) => ResourceKind::Video.tag_name(),
            Element::File(_) => ResourceKind::File.tag_name(),
            Element::Bold(_) => "b",
            Element::Italic(_) => "i",
            Element::Underline(_) => "u",
            Element::Strikethrough(_) => "s",
            Element::Spoiler(_) => "spl",
            Element::Code(_) => "code",
            Element::Superscript(_) => "sup",
            Element::Subscript(_) => "sub",
            Element::Paragraph(_) => "p",
            Element::Br(_) => "br",
            Element::Message(_) => "message",
            Element::Quote(_) => "quote",
            Element::Author(_) => "author",
            Element::Custom(custom) => &custom.tag,
            Element::Raw(_) => "raw",
        }
    }

    /// Render this element and its children as canonical markup
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Attribute names owned by the variant's fixed field set
    pub fn fixed_fields(&self) -> &'static [&'static str] {
        match self {
            Element::At(_) => AT_FIELDS,
            Element::Sharp(_) => SHARP_FIELDS,
            Element::Link(_) => LINK_FIELDS,
            Element::Image(_) => IMAGE_FIELDS,
            Element::Audio(_) | Element::Video(_) | Element::File(_) => RESOURCE_FIELDS,
            Element::Message(_) | Element::Quote(_) => MESSAGE_FIELDS,
            Element::Author(_) => AUTHOR_FIELDS,
            Element::Custom(_) => &[],
            Element::Raw(_) => RAW_FIELDS,
            Element::Text(_) => TEXT_FIELDS,
            _ => style::STYLE_FIELDS,
        }
    }

    /// The extension map; for `Custom` this is its whole attribute map
    pub fn extensions(&self) -> &AttrMap {
        match self {
            Element::Text(e) => &e.extensions,
            Element::At(e) => &e.extensions,
            Element::Sharp(e) => &e.extensions,
            Element::Link(e) => &e.extensions,
            Element::Image(e) => &e.resource.extensions,
            Element::Audio(e) | Element::Video(e) | Element::File(e) => &e.extensions,
            Element::Message(e) | Element::Quote(e) => &e.extensions,
            Element::Author(e) => &e.extensions,
            Element::Custom(e) => &e.attrs,
            Element::Raw(e) => &e.extensions,
            Element::Bold(s)
            | Element::Italic(s)
            | Element::Underline(s)
            | Element::Strikethrough(s)
            | Element::Spoiler(s)
            | Element::Code(s)
            | Element::Superscript(s)
            | Element::Subscript(s)
            | Element::Paragraph(s)
            | Element::Br(s) => &s.extensions,
        }
    }

    fn extensions_mut(&mut self) -> &mut AttrMap {
        match self {
            Element::Text(e) => &mut e.extensions,
            Element::At(e) => &mut e.extensions,
            Element::Sharp(e) => &mut e.extensions,
            Element::Link(e) => &mut e.extensions,
            Element::Image(e) => &mut e.resource.extensions,
            Element::Audio(e) | Element::Video(e) | Element::File(e) => &mut e.extensions,
            Element::Message(e) | Element::Quote(e) => &mut e.extensions,
            Element::Author(e) => &mut e.extensions,
            Element::Custom(e) => &mut e.attrs,
            Element::Raw(e) => &mut e.extensions,
            Element::Bold(s)
            | Element::Italic(s)
            | Element::Underline(s)
            | Element::Strikethrough(s)
            | Element::Spoiler(s)
            | Element::Code(s)
            | Element::Superscript(s)
            | Element::Subscript(s)
            | Element::Paragraph(s)
            | Element::Br(s) => &mut s.extensions,
        }
    }

    /// Add an extension attribute. Fixed-field names are rejected.
    pub fn insert_extension(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<(), ElementError> {
        let key = key.into();
        if self.fixed_fields().contains(&key.as_str()) {
            return Err(ElementError::ReservedAttribute { key });
        }
        self.extensions_mut().insert(key, value.into());
        Ok(())
    }

    /// Child elements of container variants
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Message(m) | Element::Quote(m) => &m.content,
            Element::Custom(c) => &c.children,
            _ => &[],
        }
    }

    /// The resource payload of `img`, `audio`, `video` and `file` elements
    pub fn resource(&self) -> Option<&ResourcePayload> {
        match self {
            Element::Image(image) => Some(&image.resource),
            Element::Audio(r) | Element::Video(r) | Element::File(r) => Some(r),
            _ => None,
        }
    }
}

/// Render a sibling list, concatenated without separators
pub fn render_all(elements: &[Element]) -> String {
    elements.iter().map(Element::to_string).collect()
}

/// `<tag fields... extensions... />`
fn write_default(
    f: &mut fmt::Formatter<'_>,
    tag: &str,
    fields: &[(&str, Option<AttrValue>)],
    extensions: &AttrMap,
) -> fmt::Result {
    write!(f, "<{}", tag)?;
    for (key, value) in fields {
        if let Some(value) = value {
            write!(f, "{}", RenderAttr { key, value })?;
        }
    }
    write_attrs(f, extensions)?;
    f.write_str(" />")
}

fn text_attr(value: &Option<String>) -> Option<AttrValue> {
    value.as_ref().map(|v| AttrValue::String(v.clone()))
}

fn write_children(f: &mut fmt::Formatter<'_>, children: &[Element]) -> fmt::Result {
    for child in children {
        write!(f, "{}", child)?;
    }
    Ok(())
}

fn write_message(f: &mut fmt::Formatter<'_>, tag: &str, message: &MessagePayload) -> fmt::Result {
    write!(f, "<{}", tag)?;
    if let Some(id) = message.id.as_deref().filter(|id| !id.is_empty()) {
        write!(f, " id=\"{}\"", escape(id))?;
    }
    if message.forward == Some(true) {
        f.write_str(" forward")?;
    }
    if message.content.is_empty() {
        return f.write_str(" />");
    }
    f.write_str(">")?;
    write_children(f, &message.content)?;
    write!(f, "</{}>", tag)
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Text(text) => f.write_str(&escape(&text.text)),
            Element::At(at) => write_default(
                f,
                "at",
                &[
                    ("id", text_attr(&at.id)),
                    ("name", text_attr(&at.name)),
                    ("role", text_attr(&at.role)),
                    ("type", text_attr(&at.kind)),
                ],
                &at.extensions,
            ),
            Element::Sharp(sharp) => write_default(
                f,
                "sharp",
                &[
                    ("id", Some(AttrValue::String(sharp.id.clone()))),
                    ("name", text_attr(&sharp.name)),
                ],
                &sharp.extensions,
            ),
            Element::Link(link) => match link.display.as_deref().filter(|d| !d.is_empty()) {
                None => write!(f, "<a href=\"{}\"/>", escape(&link.url)),
                Some(display) => {
                    write!(f, "<a href=\"{}\">{}</a>", escape(&link.url), escape(display))
                }
            },
            Element::Image(image) => {
                let mut fields = image.resource.fields();
                fields.push(("width", image.width.map(AttrValue::from)));
                fields.push(("height", image.height.map(AttrValue::from)));
                write_default(f, self.tag_name(), &fields, &image.resource.extensions)
            }
            Element::Audio(resource) | Element::Video(resource) | Element::File(resource) => {
                write_default(f, self.tag_name(), &resource.fields(), &resource.extensions)
            }
            Element::Br(_) => f.write_str("<br/>"),
            Element::Bold(s)
            | Element::Italic(s)
            | Element::Underline(s)
            | Element::Strikethrough(s)
            | Element::Spoiler(s)
            | Element::Code(s)
            | Element::Superscript(s)
            | Element::Subscript(s)
            | Element::Paragraph(s) => {
                let tag = self.tag_name();
                write!(f, "<{}>{}</{}>", tag, escape(&s.text), tag)
            }
            Element::Message(message) => write_message(f, "message", message),
            Element::Quote(message) => write_message(f, "quote", message),
            Element::Author(author) => write_default(
                f,
                "author",
                &[
                    ("id", Some(AttrValue::String(author.id.clone()))),
                    ("nickname", text_attr(&author.nickname)),
                    ("avatar", text_attr(&author.avatar)),
                ],
                &author.extensions,
            ),
            Element::Custom(custom) => {
                write!(f, "<{}", custom.tag)?;
                write_attrs(f, &custom.attrs)?;
                if custom.children.is_empty() {
                    return f.write_str(" />");
                }
                f.write_str(">")?;
                write_children(f, &custom.children)?;
                write!(f, "</{}>", custom.tag)
            }
            Element::Raw(raw) => f.write_str(&raw.content),
        }
    }
}
