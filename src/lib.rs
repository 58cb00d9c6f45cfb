//! xfmarkup - Message Element Library
//!
//! xfmarkup models chat message content as a tree of typed elements that
//! converts between three forms: generic parsed nodes, the strongly typed
//! `Element` enum, and canonical XML-like markup.
//!
//! # Overview
//!
//! - Transform generic `{tag, attributes, children}` nodes into elements,
//!   falling back to a custom element for unknown tags
//! - Render elements back to markup with escaped, ordered attributes
//! - Build image/audio/video/file resources from a URL, an absolute path
//!   or raw bytes (encoded as a `data:` URI)
//! - Serve routes that accept element content over HTTP and publish
//!   provider events (feature `server`)
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types, no I/O
//!   - Element tree, transform and rendering
//!   - Escaping, provider events, configuration
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `server` feature)
//!   - Request envelope, `Provider` and `Router` contracts
//!   - Route table mounted on axum
//!   - In-memory provider, event broadcasting, resource fetching
//!
//! # Feature Flags
//!
//! - **`server`** (default) - enables `backend` and the `xfmarkup` binary
//!
//! # Usage
//!
//! ```rust,ignore
//! use xfmarkup::shared::{render_all, E};
//!
//! let content = vec![E::text("hi "), E::all(false), E::bold("<3")];
//! assert_eq!(render_all(&content), r#"hi <at type="all" /><b>&lt;3</b>"#);
//!
//! let parsed = xfmarkup::shared::element::transform_json(
//!     r#"[{"tag": "a", "attributes": {"href": "https://x"}}]"#,
//! )?;
//! assert_eq!(render_all(&parsed), r#"<a href="https://x"/>"#);
//! ```
//!
//! # Error Handling
//!
//! - `shared::ElementError` for construction and transform failures
//! - `shared::ConfigError` for configuration
//! - `backend::BackendError` for route and provider failures, convertible
//!   into an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;
