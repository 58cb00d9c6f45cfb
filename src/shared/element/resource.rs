//! Media resources
//!
//! Images, audio, video and files share one payload: a `src` (URL or `data:`
//! URI) plus optional `cache` and `timeout` hints. Images add a size.
//!
//! Resources built by hand go through [`ResourceOptions`], which enforces
//! that exactly one content source is given:
//!
//! ```rust,ignore
//! let image = ResourceOptions::new()
//!     .raw(png_bytes, "image/png")
//!     .flag("spoiler")
//!     .build(ResourceKind::Image)?;
//! ```

use super::attr::{AttrMap, AttrValue};
use super::{Element, IMAGE_FIELDS, RESOURCE_FIELDS};
use crate::shared::error::ElementError;
use base64::{engine::general_purpose, Engine as _};
use std::path::PathBuf;
use url::Url;

/// Which resource variant to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Audio,
    Video,
    File,
}

impl ResourceKind {
    /// Markup tag (`img` for images)
    pub fn tag_name(self) -> &'static str {
        match self {
            ResourceKind::Image => "img",
            ResourceKind::Audio => "audio",
            ResourceKind::Video => "video",
            ResourceKind::File => "file",
        }
    }

    /// Variant name used in construction errors
    pub fn type_name(self) -> &'static str {
        match self {
            ResourceKind::Image => "Image",
            ResourceKind::Audio => "Audio",
            ResourceKind::Video => "Video",
            ResourceKind::File => "File",
        }
    }

    /// Attribute names the built element owns as typed fields
    pub fn fixed_fields(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Image => IMAGE_FIELDS,
            ResourceKind::Audio | ResourceKind::Video | ResourceKind::File => RESOURCE_FIELDS,
        }
    }

    /// Wrap a payload in the matching element variant
    pub fn wrap(self, resource: ResourcePayload) -> Element {
        match self {
            ResourceKind::Image => Element::Image(Image::new(resource)),
            ResourceKind::Audio => Element::Audio(resource),
            ResourceKind::Video => Element::Video(resource),
            ResourceKind::File => Element::File(resource),
        }
    }
}

/// Fields shared by every resource variant
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourcePayload {
    pub src: String,
    pub cache: Option<bool>,
    pub timeout: Option<String>,
    pub extensions: AttrMap,
}

impl ResourcePayload {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    /// Fixed fields in render order
    pub(crate) fn fields(&self) -> Vec<(&'static str, Option<AttrValue>)> {
        vec![
            ("src", Some(AttrValue::String(self.src.clone()))),
            ("cache", self.cache.map(AttrValue::Bool)),
            ("timeout", self.timeout.clone().map(AttrValue::String)),
        ]
    }
}

/// An image resource with an optional pixel size
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    pub resource: ResourcePayload,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Image {
    pub fn new(resource: ResourcePayload) -> Self {
        Self {
            resource,
            width: None,
            height: None,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Value of an extra attribute passed at construction time.
///
/// `Flag` is the bare-attribute placeholder and is stored as `true`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraValue {
    Flag,
    Value(AttrValue),
}

impl From<AttrValue> for ExtraValue {
    fn from(value: AttrValue) -> Self {
        ExtraValue::Value(value)
    }
}

macro_rules! extra_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ExtraValue {
                fn from(value: $ty) -> Self {
                    ExtraValue::Value(value.into())
                }
            }
        )*
    };
}

extra_value_from!(bool, &str, String, i32, i64, u32, f64);

impl ExtraValue {
    fn resolve(self) -> AttrValue {
        match self {
            ExtraValue::Flag => AttrValue::Bool(true),
            ExtraValue::Value(value) => value,
        }
    }
}

/// Arguments for building a resource element from exactly one source:
/// a URL, a local path, or raw bytes with their MIME type.
#[derive(Debug, Clone, Default)]
pub struct ResourceOptions {
    url: Option<String>,
    path: Option<PathBuf>,
    raw: Option<Vec<u8>>,
    mime: Option<String>,
    extra: Vec<(String, ExtraValue)>,
    cache: Option<bool>,
    timeout: Option<String>,
}

impl ResourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Raw content; encoded as a base64 `data:` URI
    pub fn raw(mut self, bytes: impl Into<Vec<u8>>, mime: impl Into<String>) -> Self {
        self.raw = Some(bytes.into());
        self.mime = Some(mime.into());
        self
    }

    /// Raw bytes without a MIME type. Only useful together with [`mime`](Self::mime);
    /// on its own it is an incomplete source and fails at build time.
    pub fn raw_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.raw = Some(bytes.into());
        self
    }

    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// A bare attribute, rendered as just its key
    pub fn flag(self, key: impl Into<String>) -> Self {
        self.extra(key, ExtraValue::Flag)
    }

    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    /// Build the payload, checking that exactly one source is present
    pub fn into_payload(self, kind: ResourceKind) -> Result<ResourcePayload, ElementError> {
        let type_name = kind.type_name();
        let raw_pair = match (self.raw, self.mime) {
            (Some(raw), Some(mime)) => Some((raw, mime)),
            (None, None) => None,
            _ => {
                return Err(ElementError::invalid_arguments(
                    type_name,
                    "raw content needs both bytes and a MIME type",
                ))
            }
        };

        let sources = [self.url.is_some(), self.path.is_some(), raw_pair.is_some()];
        let src = match (sources.iter().filter(|s| **s).count(), self.url, self.path, raw_pair) {
            (1, Some(url), _, _) => url,
            (1, _, Some(path), _) => Url::from_file_path(&path)
                .map_err(|_| ElementError::InvalidPath {
                    path: path.display().to_string(),
                })?
                .to_string(),
            (1, _, _, Some((raw, mime))) => {
                format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(raw))
            }
            (0, ..) => {
                return Err(ElementError::invalid_arguments(
                    type_name,
                    "need one of url, path and raw",
                ))
            }
            _ => {
                return Err(ElementError::invalid_arguments(
                    type_name,
                    "only one of url, path and raw may be given",
                ))
            }
        };

        let mut extensions = AttrMap::new();
        for (key, value) in self.extra {
            if kind.fixed_fields().contains(&key.as_str()) {
                return Err(ElementError::ReservedAttribute { key });
            }
            extensions.insert(key, value.resolve());
        }

        Ok(ResourcePayload {
            src,
            cache: self.cache,
            timeout: self.timeout,
            extensions,
        })
    }

    /// Build the element of the given kind
    pub fn build(self, kind: ResourceKind) -> Result<Element, ElementError> {
        self.into_payload(kind).map(|payload| kind.wrap(payload))
    }
}
