//! Server Module
//!
//! Assembles a runnable axum application around a `MemoryProvider`.

/// Application initialization
pub mod init;

pub use init::create_app;
