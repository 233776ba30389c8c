//! Wire test vectors for cursor tokens.
//!
//! These vectors pin the token format so that other implementations of the
//! cursor codec can check byte-for-byte compatibility.

use crate::fixtures::{record_token, HOST_OID, SENTINEL_TOKEN};
use serde::{Deserialize, Serialize};
use watchcursor_core::{Cursor, Position, ResourceType, NO_EVENT_OID};

/// Cursor fields as they appear in a vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorCursor {
    /// Canonical resource type name.
    pub kind: ResourceType,
    /// Position seconds.
    pub seconds: u32,
    /// Position counter.
    pub counter: u32,
    /// Object id.
    pub oid: String,
}

impl VectorCursor {
    fn new(kind: ResourceType, seconds: u32, counter: u32, oid: &str) -> Self {
        Self {
            kind,
            seconds,
            counter,
            oid: oid.to_string(),
        }
    }

    /// Converts to a cursor.
    pub fn to_cursor(&self) -> Cursor {
        Cursor::new(
            self.kind,
            Position::new(self.seconds, self.counter),
            self.oid.clone(),
        )
    }
}

/// An encode test vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Cursor to encode.
    pub input: VectorCursor,
    /// Expected token.
    pub expected_token: Option<String>,
    /// Expected error kind (if this should fail).
    pub expected_error: Option<String>,
}

/// A decode test vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Token to decode.
    pub token: String,
    /// Expected cursor.
    pub expected: Option<VectorCursor>,
    /// Expected error kind (if this should fail).
    pub expected_error: Option<String>,
}

fn encode_ok(id: &str, description: &str, input: VectorCursor, token: String) -> EncodeVector {
    EncodeVector {
        id: id.into(),
        description: description.into(),
        input,
        expected_token: Some(token),
        expected_error: None,
    }
}

fn encode_err(id: &str, description: &str, input: VectorCursor, error: &str) -> EncodeVector {
    EncodeVector {
        id: id.into(),
        description: description.into(),
        input,
        expected_token: None,
        expected_error: Some(error.into()),
    }
}

fn decode_ok(id: &str, description: &str, token: String, expected: VectorCursor) -> DecodeVector {
    DecodeVector {
        id: id.into(),
        description: description.into(),
        token,
        expected: Some(expected),
        expected_error: None,
    }
}

fn decode_err(id: &str, description: &str, token: String, error: &str) -> DecodeVector {
    DecodeVector {
        id: id.into(),
        description: description.into(),
        token,
        expected: None,
        expected_error: Some(error.into()),
    }
}

/// Encode test vectors.
pub fn encode_vectors() -> Vec<EncodeVector> {
    vec![
        encode_ok(
            "encode_no_event",
            "No-event cursor",
            VectorCursor::new(ResourceType::NoEvent, 1, 1, NO_EVENT_OID),
            SENTINEL_TOKEN.into(),
        ),
        encode_ok(
            "encode_host",
            "Host cursor at (100, 3)",
            VectorCursor::new(ResourceType::Host, 100, 3, HOST_OID),
            record_token(&["1", "2", "100", "3", HOST_OID]),
        ),
        encode_ok(
            "encode_object_max",
            "Object cursor at the largest position",
            VectorCursor::new(ResourceType::ObjectInstance, u32::MAX, u32::MAX, HOST_OID),
            record_token(&["1", "7", "4294967295", "4294967295", HOST_OID]),
        ),
        encode_err(
            "encode_zero_seconds",
            "Seconds must be non-zero",
            VectorCursor::new(ResourceType::Host, 0, 3, HOST_OID),
            "invalid_position",
        ),
        encode_err(
            "encode_empty_oid",
            "Object id must be present",
            VectorCursor::new(ResourceType::Host, 100, 3, ""),
            "empty_object_id",
        ),
        encode_err(
            "encode_unknown_type",
            "Unknown has no wire code",
            VectorCursor::new(ResourceType::Unknown, 100, 3, HOST_OID),
            "unsupported_type",
        ),
        encode_err(
            "encode_bad_oid",
            "Object id must be 24 lowercase hex characters",
            VectorCursor::new(ResourceType::Host, 100, 3, "AAAAAAAAAAAAAAAAAAAAAAAA"),
            "invalid_object_id",
        ),
    ]
}

/// Decode test vectors.
pub fn decode_vectors() -> Vec<DecodeVector> {
    vec![
        decode_ok(
            "decode_no_event",
            "No-event token",
            SENTINEL_TOKEN.into(),
            VectorCursor::new(ResourceType::NoEvent, 1, 1, NO_EVENT_OID),
        ),
        decode_ok(
            "decode_oid_first",
            "Record with the oid ahead of the position",
            record_token(&["1", "2", HOST_OID, "100", "3"]),
            VectorCursor::new(ResourceType::Host, 100, 3, HOST_OID),
        ),
        decode_ok(
            "decode_future_type",
            "Type code from a newer build",
            record_token(&["1", "42", "100", "3", HOST_OID]),
            VectorCursor::new(ResourceType::Unknown, 100, 3, HOST_OID),
        ),
        decode_ok(
            "decode_no_event_moved",
            "No-event type at another position is accepted as-is",
            record_token(&["1", "1", "77", "0", HOST_OID]),
            VectorCursor::new(ResourceType::NoEvent, 77, 0, HOST_OID),
        ),
        decode_err(
            "decode_version_2",
            "Version 2 is not supported",
            record_token(&["2", "2", "100", "3", HOST_OID]),
            "unsupported_version",
        ),
        decode_err(
            "decode_not_base64",
            "Text that is not base64",
            "%%%not-a-cursor%%%".into(),
            "malformed_token",
        ),
        decode_err(
            "decode_four_fields",
            "Too few fields",
            record_token(&["1", "2", "100", HOST_OID]),
            "malformed_token",
        ),
        decode_err(
            "decode_six_fields",
            "Too many fields",
            record_token(&["1", "2", "100", "3", HOST_OID, ""]),
            "malformed_token",
        ),
        decode_err(
            "decode_bad_oid",
            "Object id with the wrong shape",
            record_token(&["1", "2", "100", "3", "not-an-oid"]),
            "malformed_token",
        ),
        decode_err(
            "decode_non_numeric_type",
            "Type code is not a number",
            record_token(&["1", "host", "100", "3", HOST_OID]),
            "malformed_token",
        ),
        decode_err(
            "decode_seconds_overflow",
            "Seconds beyond u32",
            record_token(&["1", "2", "4294967296", "3", HOST_OID]),
            "malformed_token",
        ),
    ]
}

/// Generate all test vectors as JSON for cross-language use.
pub fn all_vectors_json() -> String {
    let vectors = AllTestVectors {
        encode: encode_vectors(),
        decode: decode_vectors(),
    };

    serde_json::to_string_pretty(&vectors).expect("Failed to serialize vectors")
}

#[derive(Debug, Serialize, Deserialize)]
struct AllTestVectors {
    encode: Vec<EncodeVector>,
    decode: Vec<DecodeVector>,
}
