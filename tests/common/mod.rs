//! Common test utilities and helpers
//!
//! - Custom assertion macros
//! - Generic node fixtures

pub mod assertions;
pub mod fixtures;

// Re-export commonly used utilities
pub use fixtures::*;
