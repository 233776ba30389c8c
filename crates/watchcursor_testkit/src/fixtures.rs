//! Well-known cursors and token builders.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use watchcursor_core::{Cursor, CursorError, Position, ResourceType, FIELD_SEPARATOR};

/// The published no-event token.
pub const SENTINEL_TOKEN: &str = "MQ0xDTENMQ01ZWE2ZDNmMzk0YzFmNWQ5ODZlOWJkODY=";

/// An object id used by host fixtures.
pub const HOST_OID: &str = "aaaaaaaaaaaaaaaaaaaaaaaa";

/// A second object id, distinct from [`HOST_OID`].
pub const OTHER_OID: &str = "0123456789abcdef01234567";

/// A host cursor at position (100, 3).
pub fn host_cursor() -> Cursor {
    Cursor::new(ResourceType::Host, Position::new(100, 3), HOST_OID)
}

/// Builds a token from raw fields, without any validation.
///
/// Useful for producing tokens the encoder would refuse to write.
pub fn record_token(fields: &[&str]) -> String {
    let separator = char::from(FIELD_SEPARATOR).to_string();
    STANDARD.encode(fields.join(separator.as_str()))
}

/// Decodes a token to its raw fields.
///
/// # Panics
///
/// Panics if the token is not valid base64 or not UTF-8.
pub fn token_fields(token: &str) -> Vec<String> {
    let bytes = STANDARD.decode(token).expect("token is not base64");
    let text = String::from_utf8(bytes).expect("token record is not UTF-8");
    text.split(char::from(FIELD_SEPARATOR))
        .map(str::to_string)
        .collect()
}

/// Stable short name of an error kind, as used in test vectors.
pub fn error_kind(err: &CursorError) -> &'static str {
    match err {
        CursorError::MalformedToken { .. } => "malformed_token",
        CursorError::UnsupportedVersion { .. } => "unsupported_version",
        CursorError::InvalidPosition => "invalid_position",
        CursorError::EmptyObjectId => "empty_object_id",
        CursorError::InvalidObjectId { .. } => "invalid_object_id",
        CursorError::UnsupportedType { .. } => "unsupported_type",
        CursorError::UnsupportedSource { .. } => "unsupported_source",
        CursorError::UnknownResourceType { .. } => "unknown_resource_type",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_token_matches_encoder() {
        let token = record_token(&["1", "2", "100", "3", HOST_OID]);
        assert_eq!(token, host_cursor().encode().unwrap());
    }

    #[test]
    fn sentinel_fields() {
        assert_eq!(
            token_fields(SENTINEL_TOKEN),
            vec!["1", "1", "1", "1", "5ea6d3f394c1f5d986e9bd86"]
        );
    }

    #[test]
    fn error_kinds() {
        assert_eq!(error_kind(&CursorError::InvalidPosition), "invalid_position");
        assert_eq!(
            error_kind(&CursorError::malformed("x")),
            "malformed_token"
        );
    }
}
