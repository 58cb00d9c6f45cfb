//! Route Configuration Module
//!
//! Actions are registered by name in a `RouteTable` and served over HTTP as
//! `POST {path}/{version}/{action}`, with the JSON body as params.
//!
//! ```
//! routes/
//! ├── mod.rs     - Module exports and documentation
//! ├── table.rs   - RouteTable, header validation and dispatch
//! ├── router.rs  - axum router assembly
//! └── actions.rs - Built-in actions backed by a MemoryProvider
//! ```
//!
//! # Request Flow
//!
//! 1. axum extracts the action from the path, the headers and the body
//! 2. `dispatch` rejects requests whose headers fail `validate_headers` (401)
//! 3. the action is looked up (404 when unknown)
//! 4. the handler decodes its params (400 when they do not fit) and runs
//! 5. the result is returned as JSON; errors become `{"error", "status"}`
//!
//! # Headers
//!
//! - `X-Platform` and `X-Self-ID` are always required
//! - `Authorization: Bearer <token>` is passed to the table's provider via
//!   `Provider::authenticate`; `create_app` configures it to accept only the
//!   configured token, or any token when none is set

/// Route table and dispatch
pub mod table;

/// axum router assembly
pub mod router;

/// Built-in actions
pub mod actions;

// Re-export commonly used functions
pub use actions::register_actions;
pub use router::create_router;
pub use table::{dispatch, RouteTable};
