//! Shared Error Types
//!
//! This module defines the errors raised while building, transforming and
//! decoding message elements. They are shared between the element tree and
//! the server-side contracts, which wrap them in `BackendError`.
//!
//! # Error Categories
//!
//! - `InvalidArguments` - a resource was built with zero or conflicting sources
//! - `MissingAttribute` / `MissingChild` / `InvalidAttribute` - malformed input
//!   encountered while transforming a generic node
//! - `ReservedAttribute` - an extension key shadows a fixed field
//! - `InvalidPath` - a resource path that cannot become a `file://` URI
//! - `Serialization` - JSON input could not be decoded
//!
//! # Usage
//!
//! ```rust,ignore
//! use xfmarkup::shared::error::ElementError;
//!
//! let error = ElementError::missing_attribute("a", "href");
//! assert_eq!(error.to_string(), "<a> is missing required attribute 'href'");
//! ```
use thiserror::Error;

/// Errors produced by the element tree
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ElementError {
    /// A resource element was constructed without exactly one content source
    #[error("invalid arguments for {type_name}: {message}")]
    InvalidArguments {
        /// The variant being constructed (`Image`, `Audio`, ...)
        type_name: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// A structurally required attribute is absent from a node
    #[error("<{tag}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Tag of the offending node
        tag: String,
        /// Name of the missing attribute
        attribute: String,
    },

    /// A node that needs a child (e.g. a style tag) has none
    #[error("<{tag}> requires at least one child node")]
    MissingChild {
        /// Tag of the offending node
        tag: String,
    },

    /// A required attribute is present but cannot be read as its field
    #[error("<{tag}> attribute '{attribute}' must be {expected}")]
    InvalidAttribute {
        tag: String,
        attribute: String,
        expected: &'static str,
    },

    /// An extension key collides with a fixed field of the element
    #[error("'{key}' is a fixed field and cannot be used as an extension attribute")]
    ReservedAttribute { key: String },

    /// A resource path could not be turned into a `file://` URI
    #[error("path '{path}' must be absolute")]
    InvalidPath { path: String },

    /// JSON decoding error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ElementError {
    /// Create a new construction error for a resource variant
    pub fn invalid_arguments(type_name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            type_name,
            message: message.into(),
        }
    }

    /// Create a new missing-attribute error
    pub fn missing_attribute(tag: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            tag: tag.into(),
            attribute: attribute.into(),
        }
    }

    /// Create a new missing-child error
    pub fn missing_child(tag: impl Into<String>) -> Self {
        Self::MissingChild { tag: tag.into() }
    }

    /// Create a new invalid-attribute error
    pub fn invalid_attribute(
        tag: impl Into<String>,
        attribute: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidAttribute {
            tag: tag.into(),
            attribute: attribute.into(),
            expected,
        }
    }
}

impl From<serde_json::Error> for ElementError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON error: {}", err),
        }
    }
}
