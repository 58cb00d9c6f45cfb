//! Generic tree → element tree
//!
//! A markup parser emits [`GenericNode`]s: a tag, an ordered attribute map and
//! child nodes. [`transform`] turns one level of siblings into typed
//! [`Element`]s, recursing into containers.
//!
//! # Dispatch order
//!
//! 1. exact tags (`text`, `at`, `sharp`, `img`, `audio`, `video`, `file`, `author`)
//! 2. anchor aliases (`a`, `link`)
//! 3. style tags and their aliases (`b`/`strong`, `i`/`em`, ...)
//! 4. line breaks (`br`, `newline`)
//! 5. `message`, then `quote`
//! 6. anything else becomes `Custom`, children transformed recursively
//!
//! The order matters: `strong` must resolve to `Bold` before the fallback can
//! see it.
//!
//! # Errors
//!
//! A node missing a structurally required attribute or child aborts the whole
//! sibling list; there is no partial result.

use super::attr::{extensions_except, require_text, AttrMap, AttrValue, FieldReader};
use super::resource::{Image, ResourceKind, ResourcePayload};
use super::style::{style_for, StylePayload, BREAK_TAGS, STYLE_FIELDS};
use super::{At, Author, Custom, Element, Link, MessagePayload, Sharp, Text};
use super::{AT_FIELDS, AUTHOR_FIELDS, IMAGE_FIELDS, MESSAGE_FIELDS, RESOURCE_FIELDS};
use super::{SHARP_FIELDS, TEXT_FIELDS};
use crate::shared::error::ElementError;
use serde::{Deserialize, Deserializer, Serialize};

/// One node of the parser's attributed tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenericNode {
    pub tag: String,
    #[serde(default)]
    pub attributes: AttrMap,
    #[serde(default)]
    pub children: Vec<GenericNode>,
}

impl GenericNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// A `text` node, the parser's representation of character data
    pub fn text(text: impl Into<String>) -> Self {
        Self::new("text").attr("text", text.into())
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, child: GenericNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<GenericNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// `text` attribute of the first child, as used by anchors and styles
    fn first_child_text(&self) -> Result<Option<String>, ElementError> {
        match self.children.first() {
            None => Ok(None),
            Some(child) => require_text(&child.attributes, &child.tag, "text").map(Some),
        }
    }
}

type Constructor = fn(&GenericNode) -> Result<Element, ElementError>;

/// Tags with a dedicated variant, matched exactly
const ELEMENT_TABLE: &[(&str, Constructor)] = &[
    ("text", text_from_node),
    ("at", at_from_node),
    ("sharp", sharp_from_node),
    ("img", image_from_node),
    ("audio", audio_from_node),
    ("video", video_from_node),
    ("file", file_from_node),
    ("author", author_from_node),
];

const LINK_ALIASES: &[&str] = &["a", "link"];

fn text_from_node(node: &GenericNode) -> Result<Element, ElementError> {
    let attrs = &node.attributes;
    Ok(Element::Text(Text {
        text: require_text(attrs, &node.tag, "text")?,
        extensions: extensions_except(attrs, TEXT_FIELDS),
    }))
}

fn at_from_node(node: &GenericNode) -> Result<Element, ElementError> {
    let mut fields = FieldReader::new(&node.attributes, &node.tag);
    Ok(Element::At(At {
        id: fields.text("id"),
        name: fields.text("name"),
        role: fields.text("role"),
        kind: fields.text("type"),
        extensions: fields.extensions(AT_FIELDS),
    }))
}

fn sharp_from_node(node: &GenericNode) -> Result<Element, ElementError> {
    let mut fields = FieldReader::new(&node.attributes, &node.tag);
    Ok(Element::Sharp(Sharp {
        id: fields.require_text("id")?,
        name: fields.text("name"),
        extensions: fields.extensions(SHARP_FIELDS),
    }))
}

fn resource_from_node(
    fields: &mut FieldReader<'_>,
    fixed: &[&str],
) -> Result<ResourcePayload, ElementError> {
    Ok(ResourcePayload {
        src: fields.require_text("src")?,
        cache: fields.bool("cache"),
        timeout: fields.text("timeout"),
        extensions: fields.extensions(fixed),
    })
}

fn image_from_node(node: &GenericNode) -> Result<Element, ElementError> {
    let mut fields = FieldReader::new(&node.attributes, &node.tag);
    let width = fields.dimension("width");
    let height = fields.dimension("height");
    Ok(Element::Image(Image {
        resource: resource_from_node(&mut fields, IMAGE_FIELDS)?,
        width,
        height,
    }))
}

fn plain_resource_from_node(
    node: &GenericNode,
    kind: ResourceKind,
) -> Result<Element, ElementError> {
    let mut fields = FieldReader::new(&node.attributes, &node.tag);
    Ok(kind.wrap(resource_from_node(&mut fields, RESOURCE_FIELDS)?))
}

fn audio_from_node(node: &GenericNode) -> Result<Element, ElementError> {
    plain_resource_from_node(node, ResourceKind::Audio)
}

fn video_from_node(node: &GenericNode) -> Result<Element, ElementError> {
    plain_resource_from_node(node, ResourceKind::Video)
}

fn file_from_node(node: &GenericNode) -> Result<Element, ElementError> {
    plain_resource_from_node(node, ResourceKind::File)
}

fn author_from_node(node: &GenericNode) -> Result<Element, ElementError> {
    let mut fields = FieldReader::new(&node.attributes, &node.tag);
    Ok(Element::Author(Author {
        id: fields.require_text("id")?,
        nickname: fields.text("nickname"),
        avatar: fields.text("avatar"),
        extensions: fields.extensions(AUTHOR_FIELDS),
    }))
}

fn link_from_node(node: &GenericNode) -> Result<Element, ElementError> {
    let attrs = &node.attributes;
    Ok(Element::Link(Link {
        url: require_text(attrs, &node.tag, "href")?,
        display: node.first_child_text()?,
        extensions: extensions_except(attrs, super::LINK_FIELDS),
    }))
}

fn style_payload_from_node(node: &GenericNode) -> Result<StylePayload, ElementError> {
    let text = node
        .first_child_text()?
        .ok_or_else(|| ElementError::missing_child(&node.tag))?;
    Ok(StylePayload {
        text,
        extensions: extensions_except(&node.attributes, STYLE_FIELDS),
    })
}

fn message_payload_from_node(node: &GenericNode) -> Result<MessagePayload, ElementError> {
    let mut fields = FieldReader::new(&node.attributes, &node.tag);
    Ok(MessagePayload {
        id: fields.text("id"),
        forward: fields.bool("forward"),
        content: transform(&node.children)?,
        extensions: fields.extensions(MESSAGE_FIELDS),
    })
}

/// Convert a single node, recursing into its children where the variant owns them
pub fn transform_node(node: &GenericNode) -> Result<Element, ElementError> {
    let tag = node.tag.as_str();

    if let Some((_, constructor)) = ELEMENT_TABLE.iter().find(|(name, _)| *name == tag) {
        return constructor(node);
    }
    if LINK_ALIASES.contains(&tag) {
        return link_from_node(node);
    }
    if let Some(constructor) = style_for(tag) {
        return style_payload_from_node(node).map(constructor);
    }
    if BREAK_TAGS.contains(&tag) {
        return Ok(Element::Br(StylePayload::line_break()));
    }
    match tag {
        "message" => message_payload_from_node(node).map(Element::Message),
        "quote" => message_payload_from_node(node).map(Element::Quote),
        _ => {
            tracing::debug!(tag, "Unrecognised tag, keeping as custom element");
            Ok(Element::Custom(Custom {
                tag: node.tag.clone(),
                attrs: node.attributes.clone(),
                children: transform(&node.children)?,
            }))
        }
    }
}

/// Convert a sibling list of generic nodes into typed elements.
///
/// Fails on the first malformed node.
pub fn transform(nodes: &[GenericNode]) -> Result<Vec<Element>, ElementError> {
    nodes
        .iter()
        .map(|node| {
            transform_node(node).inspect_err(|err| {
                tracing::warn!(tag = %node.tag, error = %err, "Failed to transform node");
            })
        })
        .collect()
}

/// Decode a JSON array of generic nodes and transform it
pub fn transform_json(json: &str) -> Result<Vec<Element>, ElementError> {
    let nodes: Vec<GenericNode> = serde_json::from_str(json)?;
    transform(&nodes)
}

/// Elements decode from the generic-node JSON shape
impl<'de> Deserialize<'de> for Element {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = GenericNode::deserialize(deserializer)?;
        transform_node(&node).map_err(serde::de::Error::custom)
    }
}
