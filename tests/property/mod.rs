//! Property-based tests

pub mod escape_proptest;
pub mod render_proptest;
pub mod transform_proptest;
