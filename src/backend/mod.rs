//! Backend Module
//!
//! Server-side contracts around the element model: the request envelope,
//! the `Provider` and `Router` traits, the route table and its axum
//! mounting, an in-memory provider, event broadcasting and resource
//! fetching.
//!
//! This module is only compiled when the `server` feature is enabled.
//!
//! # Module Structure
//!
//! ```
//! backend/
//! ├── mod.rs       - Module exports and documentation
//! ├── model.rs     - Request, Provider, Router, RouteCall
//! ├── routes/      - RouteTable, dispatch, axum router, built-in actions
//! ├── realtime/    - Event broadcast channel and subscriber streams
//! ├── provider.rs  - MemoryProvider
//! ├── resource.rs  - fetch_resource
//! ├── server/      - Application assembly
//! └── error/       - Error types
//! ```
//!
//! # Elements on the wire
//!
//! Requests carry JSON params. A route that accepts message content
//! declares its params as `Vec<Element>`; decoding runs the node array
//! through the transform, so a malformed node fails the request with 400
//! before the handler runs. Outgoing events carry rendered markup.
//!
//! # Example
//!
//! ```rust,ignore
//! use xfmarkup::backend::server::create_app;
//! use xfmarkup::shared::ServerConfig;
//!
//! let config = ServerConfig::from_env()?;
//! let (app, provider) = create_app(&config);
//! let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
//! axum::serve(listener, app).await?;
//! ```

/// Request, provider and router contracts
pub mod model;

/// Route configuration
pub mod routes;

/// Real-time event system
pub mod realtime;

/// In-memory provider
pub mod provider;

/// Resource fetching
pub mod resource;

/// Server assembly
pub mod server;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use model::{Provider, Request, RouteCall, RouteFuture, Router};
pub use provider::MemoryProvider;
pub use realtime::{broadcast_event, EventBroadcast};
pub use resource::{fetch_element_resource, fetch_resource};
pub use routes::{create_router, dispatch, RouteTable};
pub use server::create_app;
