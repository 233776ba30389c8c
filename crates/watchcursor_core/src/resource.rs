//! Resource type taxonomy.
//!
//! Every cursor carries the kind of resource its event belongs to. On the
//! wire the kind is a small positive integer; the codes below are permanent
//! and must never be renumbered or reused.

use crate::error::CursorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Code returned for types that have no wire representation.
pub const NO_CODE: i32 = -1;

/// The kind of resource a cursor points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// No event has occurred yet. Only used by the sentinel cursor.
    NoEvent,
    /// A type this build does not recognize.
    Unknown,
    /// Host records.
    Host,
    /// Host to module relations.
    HostRelation,
    /// Business records.
    Biz,
    /// Set records.
    Set,
    /// Module records.
    Module,
    /// Generic object instances.
    #[serde(rename = "object")]
    ObjectInstance,
}

const WATCHABLE: [ResourceType; 6] = [
    ResourceType::Host,
    ResourceType::HostRelation,
    ResourceType::Biz,
    ResourceType::Set,
    ResourceType::Module,
    ResourceType::ObjectInstance,
];

impl ResourceType {
    /// Returns the wire code, or [`NO_CODE`] for `Unknown`.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::NoEvent => 1,
            Self::Host => 2,
            Self::HostRelation => 3,
            Self::Biz => 4,
            Self::Set => 5,
            Self::Module => 6,
            Self::ObjectInstance => 7,
            Self::Unknown => NO_CODE,
        }
    }

    /// Maps a wire code back to a type.
    ///
    /// Codes this build does not know, including zero and negatives, map to
    /// `Unknown` so that an older reader degrades instead of failing.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::NoEvent,
            2 => Self::Host,
            3 => Self::HostRelation,
            4 => Self::Biz,
            5 => Self::Set,
            6 => Self::Module,
            7 => Self::ObjectInstance,
            _ => Self::Unknown,
        }
    }

    /// Returns true if this type can be written into a token.
    #[must_use]
    pub const fn is_encodable(self) -> bool {
        self.code() > 0
    }

    /// The types clients may subscribe to, in advertised order.
    #[must_use]
    pub fn watchable() -> &'static [ResourceType] {
        &WATCHABLE
    }

    /// Maps an event-kind label (e.g. `hostcreate`) to its owning type.
    ///
    /// Unrecognized labels map to `Unknown`.
    #[must_use]
    pub fn classify(event_kind: &str) -> Self {
        match event_kind {
            "hostcreate" | "hostupdate" | "hostdelete" => Self::Host,
            "host_relation" => Self::HostRelation,
            "bizcreate" | "bizupdate" | "bizdelete" => Self::Biz,
            "setcreate" | "setupdate" | "setdelete" => Self::Set,
            "modulecreate" | "moduleupdate" | "moduledelete" => Self::Module,
            "objectcreate" | "objectupdate" | "objectdelete" => Self::ObjectInstance,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoEvent => "no_event",
            Self::Unknown => "unknown",
            Self::Host => "host",
            Self::HostRelation => "host_relation",
            Self::Biz => "biz",
            Self::Set => "set",
            Self::Module => "module",
            Self::ObjectInstance => "object",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_event" => Ok(Self::NoEvent),
            "unknown" => Ok(Self::Unknown),
            "host" => Ok(Self::Host),
            "host_relation" => Ok(Self::HostRelation),
            "biz" => Ok(Self::Biz),
            "set" => Ok(Self::Set),
            "module" => Ok(Self::Module),
            "object" => Ok(Self::ObjectInstance),
            other => Err(CursorError::UnknownResourceType {
                name: other.to_string(),
            }),
        }
    }
}
