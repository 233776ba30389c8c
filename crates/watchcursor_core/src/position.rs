//! Logical stream position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the source's event order.
///
/// Positions compare lexicographically on `(seconds, counter)`. A position
/// with `seconds == 0` is unset and cannot be encoded.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Wall-clock seconds assigned by the source.
    pub seconds: u32,
    /// Logical counter disambiguating events within the same second.
    pub counter: u32,
}

impl Position {
    /// Creates a position.
    #[inline]
    #[must_use]
    pub const fn new(seconds: u32, counter: u32) -> Self {
        Self { seconds, counter }
    }

    /// Returns true if the position has been assigned.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.seconds != 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.seconds, self.counter)
    }
}

impl From<(u32, u32)> for Position {
    fn from((seconds, counter): (u32, u32)) -> Self {
        Self::new(seconds, counter)
    }
}
