//! Attribute values
//!
//! Attribute values arrive from the markup parser as strings, numbers,
//! booleans or nulls. The same type backs the extension map of every element
//! and the attribute map of `Custom`.

use crate::shared::error::ElementError;
use crate::shared::escape::escape;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Ordered attribute mapping, preserving insertion order for rendering
pub type AttrMap = IndexMap<String, AttrValue>;

/// Keys starting with this marker are internal and never rendered
pub const INTERNAL_MARKER: char = '_';

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(Number),
    String(String),
    Null,
}

impl AttrValue {
    /// Stringify text-like values; booleans and nulls are not text
    pub fn as_text(&self) -> Option<String> {
        match self {
            AttrValue::String(s) => Some(s.clone()),
            AttrValue::Number(n) => Some(n.to_string()),
            AttrValue::Bool(_) | AttrValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Number(value.into())
    }
}

impl From<f64> for AttrValue {
    /// Non-finite floats have no markup form and become `Null`
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(AttrValue::Number)
            .unwrap_or(AttrValue::Null)
    }
}

/// One rendered attribute, written with a leading space.
///
/// - `true` → bare key
/// - `false` → `no-<key>`
/// - number → `key=value`
/// - string → `key="<escaped>"`
///
/// Internal keys and nulls render to nothing.
pub(crate) struct RenderAttr<'a> {
    pub key: &'a str,
    pub value: &'a AttrValue,
}

impl fmt::Display for RenderAttr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.starts_with(INTERNAL_MARKER) {
            return Ok(());
        }
        match self.value {
            AttrValue::Bool(true) => write!(f, " {}", self.key),
            AttrValue::Bool(false) => write!(f, " no-{}", self.key),
            AttrValue::Number(n) => write!(f, " {}={}", self.key, n),
            AttrValue::String(s) => write!(f, " {}=\"{}\"", self.key, escape(s)),
            AttrValue::Null => Ok(()),
        }
    }
}

/// Write every attribute of `attrs` in order
pub(crate) fn write_attrs(f: &mut fmt::Formatter<'_>, attrs: &AttrMap) -> fmt::Result {
    for (key, value) in attrs {
        write!(f, "{}", RenderAttr { key, value })?;
    }
    Ok(())
}

/// Read a text-typed field (`id`, `name`, ...) out of an attribute map
fn take_text(attrs: &AttrMap, tag: &str, key: &str) -> Result<Option<String>, ElementError> {
    match attrs.get(key) {
        None | Some(AttrValue::Null) => Ok(None),
        Some(value) => value
            .as_text()
            .map(Some)
            .ok_or_else(|| ElementError::invalid_attribute(tag, key, "a string")),
    }
}

/// Read a required text-typed field
pub(crate) fn require_text(attrs: &AttrMap, tag: &str, key: &str) -> Result<String, ElementError> {
    take_text(attrs, tag, key)?.ok_or_else(|| ElementError::missing_attribute(tag, key))
}

/// Typed reads of optional fixed fields.
///
/// A present value that does not fit its field (`cache="true"`,
/// `width="auto"`) leaves the field unset; the raw value is kept as an
/// extension so it still renders.
pub(crate) struct FieldReader<'a> {
    attrs: &'a AttrMap,
    tag: &'a str,
    unfitted: Vec<&'a str>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(attrs: &'a AttrMap, tag: &'a str) -> Self {
        Self {
            attrs,
            tag,
            unfitted: Vec::new(),
        }
    }

    pub(crate) fn require_text(&self, key: &str) -> Result<String, ElementError> {
        require_text(self.attrs, self.tag, key)
    }

    pub(crate) fn text(&mut self, key: &'a str) -> Option<String> {
        self.fit(key, AttrValue::as_text)
    }

    pub(crate) fn bool(&mut self, key: &'a str) -> Option<bool> {
        self.fit(key, |value| match value {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        })
    }

    /// A non-negative integer or an integer string
    pub(crate) fn dimension(&mut self, key: &'a str) -> Option<u32> {
        self.fit(key, |value| match value {
            AttrValue::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            AttrValue::String(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        })
    }

    /// Attributes outside `fixed`, plus fixed ones whose value did not fit,
    /// in their original order
    pub(crate) fn extensions(&self, fixed: &[&str]) -> AttrMap {
        self.attrs
            .iter()
            .filter(|(key, _)| {
                let key = key.as_str();
                !fixed.contains(&key) || self.unfitted.contains(&key)
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn fit<T>(&mut self, key: &'a str, parse: impl FnOnce(&AttrValue) -> Option<T>) -> Option<T> {
        let value = self.attrs.get(key).filter(|v| !v.is_null())?;
        let parsed = parse(value);
        if parsed.is_none() {
            tracing::debug!(
                tag = self.tag,
                key,
                "Attribute value does not fit its field, keeping it raw"
            );
            self.unfitted.push(key);
        }
        parsed
    }
}

/// Copy every attribute not named in `fixed` into a fresh extension map
pub(crate) fn extensions_except(attrs: &AttrMap, fixed: &[&str]) -> AttrMap {
    attrs
        .iter()
        .filter(|(key, _)| !fixed.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
