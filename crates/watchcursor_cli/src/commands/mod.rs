//! CLI command implementations.

pub mod codec;
pub mod map;
pub mod types;
