//! Error types for the cursor codec.

use crate::resource::ResourceType;
use thiserror::Error;

/// Result type for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Errors that can occur while encoding, decoding, or mapping cursors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// The token is not a structurally valid cursor.
    #[error("malformed cursor token: {reason}")]
    MalformedToken {
        /// Description of the structural problem.
        reason: String,
    },

    /// The token was produced by a codec version this build cannot read.
    #[error("unsupported cursor version: {version}")]
    UnsupportedVersion {
        /// The version field found in the token.
        version: String,
    },

    /// The position's seconds field is zero.
    #[error("invalid cursor position: seconds must be non-zero")]
    InvalidPosition,

    /// The object identifier is empty.
    #[error("invalid cursor: empty object id")]
    EmptyObjectId,

    /// The object identifier is not 24 lowercase hex characters.
    #[error("invalid cursor object id: {oid}")]
    InvalidObjectId {
        /// The offending identifier.
        oid: String,
    },

    /// The resource type has no wire code.
    #[error("unsupported cursor type: {kind}")]
    UnsupportedType {
        /// The resource type that cannot be encoded.
        kind: ResourceType,
    },

    /// The source collection is not mapped to any watchable resource type.
    #[error("unsupported cursor type collection: {collection}")]
    UnsupportedSource {
        /// The unmapped collection name.
        collection: String,
    },

    /// A resource type name could not be parsed.
    #[error("unknown resource type name: {name}")]
    UnknownResourceType {
        /// The unrecognized name.
        name: String,
    },
}

impl CursorError {
    /// Create a malformed token error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedToken {
            reason: reason.into(),
        }
    }

    /// Create an unsupported version error.
    pub fn unsupported_version(version: impl Into<String>) -> Self {
        Self::UnsupportedVersion {
            version: version.into(),
        }
    }

    /// Create an invalid object id error.
    pub fn invalid_oid(oid: impl Into<String>) -> Self {
        Self::InvalidObjectId { oid: oid.into() }
    }

    /// Create an unsupported source error.
    pub fn unsupported_source(collection: impl Into<String>) -> Self {
        Self::UnsupportedSource {
            collection: collection.into(),
        }
    }

    /// Returns true if the error came from decoding a client-supplied token.
    ///
    /// These are recoverable by rejecting the token and asking the client to
    /// subscribe afresh.
    #[must_use]
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedToken { .. } | Self::UnsupportedVersion { .. }
        )
    }

    /// Returns true if the error came from validating a cursor before encoding.
    #[must_use]
    pub fn is_encode_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPosition
                | Self::EmptyObjectId
                | Self::InvalidObjectId { .. }
                | Self::UnsupportedType { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(CursorError::malformed("x").is_decode_error());
        assert!(CursorError::unsupported_version("2").is_decode_error());
        assert!(!CursorError::InvalidPosition.is_decode_error());

        assert!(CursorError::InvalidPosition.is_encode_error());
        assert!(CursorError::EmptyObjectId.is_encode_error());
        assert!(CursorError::invalid_oid("zz").is_encode_error());
        assert!(CursorError::UnsupportedType {
            kind: ResourceType::Unknown
        }
        .is_encode_error());

        let source = CursorError::unsupported_source("cc_Nope");
        assert!(!source.is_decode_error());
        assert!(!source.is_encode_error());
    }

    #[test]
    fn messages() {
        assert_eq!(
            CursorError::malformed("invalid cursor string").to_string(),
            "malformed cursor token: invalid cursor string"
        );
        assert_eq!(
            CursorError::UnsupportedType {
                kind: ResourceType::Unknown
            }
            .to_string(),
            "unsupported cursor type: unknown"
        );
    }
}
