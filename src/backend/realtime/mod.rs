//! Real-time Event Module
//!
//! Providers publish `Event`s through a `tokio::sync::broadcast` channel;
//! each `Provider::publisher` call hands out an independent subscription.
//!
//! ```
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Channel type and broadcast helper
//! └── subscription.rs - Subscriber streams
//! ```
//!
//! Subscribers that fall behind skip the events they missed and keep
//! receiving; the lag is logged.

/// Event broadcasting utilities
pub mod broadcast;

/// Subscriber streams over the broadcast channel
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, event_channel, EventBroadcast};
pub use subscription::subscribe_events;
