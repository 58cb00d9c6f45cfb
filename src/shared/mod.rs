//! Shared Module
//!
//! Platform-agnostic types: the message element tree and its conversions,
//! the escaping primitive, provider event payloads, configuration and the
//! shared error type. Nothing here performs I/O.

/// Message element tree, transform and rendering
pub mod element;

/// Markup escaping
pub mod escape;

/// Provider events and logins
pub mod event;

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
pub use element::{render_all, transform, Element, GenericNode, E};
pub use error::ElementError;
pub use event::{Event, EventType, Login, LoginStatus, MessageObject};
