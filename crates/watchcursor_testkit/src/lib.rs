//! # watchcursor testkit
//!
//! Test utilities for watchcursor.
//!
//! This crate provides:
//! - Fixtures for well-known cursors and hand-built token records
//! - Property-based test generators using proptest
//! - Wire test vectors shared with other cursor implementations
//! - Fuzz testing harnesses
//! - Concurrent stress helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use watchcursor_testkit::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn roundtrip(cursor in cursor_strategy()) {
//!         let token = cursor.encode().unwrap();
//!         prop_assert_eq!(Cursor::decode(&token).unwrap(), cursor);
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod fuzz;
pub mod generators;
pub mod stress;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::fuzz::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
    pub use crate::vectors::*;
    pub use proptest::prelude::*;
    pub use watchcursor_core::{Cursor, CursorError, Position, ResourceType};
}

pub use fixtures::*;
pub use fuzz::*;
pub use generators::*;
pub use stress::*;
pub use vectors::*;
