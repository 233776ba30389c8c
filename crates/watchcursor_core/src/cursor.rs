//! The cursor value object.

use crate::decoder::from_token;
use crate::encoder::{to_token, validate};
use crate::error::{CursorError, CursorResult};
use crate::position::Position;
use crate::resource::ResourceType;
use crate::sentinel::{NO_EVENT_OID, NO_EVENT_POSITION};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A resume position in a watch stream.
///
/// Cursors are plain values: two cursors with equal fields are
/// interchangeable. Positions of different cursors should be compared on
/// the decoded value, never on the token text.
///
/// # Example
///
/// ```
/// use watchcursor_core::{Cursor, Position, ResourceType};
///
/// let cursor = Cursor::new(
///     ResourceType::Host,
///     Position::new(100, 3),
///     "aaaaaaaaaaaaaaaaaaaaaaaa",
/// );
/// let token = cursor.encode().unwrap();
/// assert_eq!(Cursor::decode(&token).unwrap(), cursor);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Resource type of the event.
    pub kind: ResourceType,
    /// Position of the event in the source's order.
    pub position: Position,
    /// Hex object id of the event.
    pub oid: String,
}

impl Cursor {
    /// Creates a cursor. No validation happens until it is encoded.
    pub fn new(kind: ResourceType, position: Position, oid: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            oid: oid.into(),
        }
    }

    /// Checks that this cursor can be encoded.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: zero seconds, empty oid, a type
    /// without a wire code, or a badly shaped oid.
    pub fn validate(&self) -> CursorResult<()> {
        validate(self)
    }

    /// Encodes this cursor into its token text.
    ///
    /// # Errors
    ///
    /// Fails with the same errors as [`Cursor::validate`].
    pub fn encode(&self) -> CursorResult<String> {
        to_token(self)
    }

    /// Decodes a token produced by [`Cursor::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::MalformedToken`] for structurally invalid input
    /// and [`CursorError::UnsupportedVersion`] for tokens of another version.
    pub fn decode(token: &str) -> CursorResult<Self> {
        from_token(token)
    }

    /// Returns true if this is the "no event yet" sentinel.
    #[must_use]
    pub fn is_no_event(&self) -> bool {
        self.kind == ResourceType::NoEvent
            && self.position == NO_EVENT_POSITION
            && self.oid == NO_EVENT_OID
    }
}

impl FromStr for Cursor {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for Cursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let token = self.encode().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&token)
    }
}

impl<'de> Deserialize<'de> for Cursor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::decode(&token).map_err(serde::de::Error::custom)
    }
}
