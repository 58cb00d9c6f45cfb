//! Integration tests

pub mod render_test;
pub mod resource_test;
#[cfg(feature = "server")]
pub mod routes_test;
pub mod transform_test;
