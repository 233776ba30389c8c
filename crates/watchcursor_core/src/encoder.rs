//! Cursor token encoder.

use crate::cursor::Cursor;
use crate::error::{CursorError, CursorResult};
use crate::{oid, CURSOR_VERSION, FIELD_SEPARATOR};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Upper bound on the raw record size: version, a code as wide as any
/// `i32`, oid, two u32 values and four separators.
const MAX_RECORD_LEN: usize = 1 + 11 + oid::OID_LEN + 10 + 10 + 4;

/// Checks that a cursor can be encoded.
///
/// Checks run in a fixed order and the first failure is returned.
///
/// # Errors
///
/// - [`CursorError::InvalidPosition`] if `seconds` is zero
/// - [`CursorError::EmptyObjectId`] if the oid is empty
/// - [`CursorError::UnsupportedType`] if the type has no wire code
/// - [`CursorError::InvalidObjectId`] if the oid is not 24 lowercase hex chars
pub fn validate(cursor: &Cursor) -> CursorResult<()> {
    if !cursor.position.is_set() {
        return Err(CursorError::InvalidPosition);
    }

    if cursor.oid.is_empty() {
        return Err(CursorError::EmptyObjectId);
    }

    if !cursor.kind.is_encodable() {
        return Err(CursorError::UnsupportedType { kind: cursor.kind });
    }

    if !oid::is_valid(&cursor.oid) {
        return Err(CursorError::invalid_oid(&cursor.oid));
    }

    Ok(())
}

/// Encode a cursor into its token text.
///
/// The record is `version \r code \r seconds \r counter \r oid`, with no
/// trailing separator, base64-encoded with the standard padded alphabet.
/// This is the arrangement the published no-event token uses.
///
/// # Errors
///
/// Returns the validation error if the cursor cannot be encoded. No partial
/// token is ever produced.
pub fn to_token(cursor: &Cursor) -> CursorResult<String> {
    validate(cursor)?;

    let code = cursor.kind.code().to_string();
    let seconds = cursor.position.seconds.to_string();
    let counter = cursor.position.counter.to_string();

    let mut record = Vec::with_capacity(MAX_RECORD_LEN);
    let fields = [
        CURSOR_VERSION,
        code.as_str(),
        seconds.as_str(),
        counter.as_str(),
        cursor.oid.as_str(),
    ];
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            record.push(FIELD_SEPARATOR);
        }
        record.extend_from_slice(field.as_bytes());
    }

    Ok(STANDARD.encode(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::resource::ResourceType;

    const OID: &str = "5ea6d3f394c1f5d986e9bd86";

    fn raw_record(token: &str) -> Vec<u8> {
        STANDARD.decode(token).unwrap()
    }

    #[test]
    fn sentinel_fixture() {
        let cursor = Cursor::new(ResourceType::NoEvent, Position::new(1, 1), OID);
        assert_eq!(
            to_token(&cursor).unwrap(),
            "MQ0xDTENMQ01ZWE2ZDNmMzk0YzFmNWQ5ODZlOWJkODY="
        );
    }

    #[test]
    fn record_layout() {
        let cursor = Cursor::new(
            ResourceType::Module,
            Position::new(1_588_000_000, 17),
            OID,
        );
        let token = to_token(&cursor).unwrap();
        assert_eq!(
            raw_record(&token),
            b"1\r6\r1588000000\r17\r5ea6d3f394c1f5d986e9bd86".to_vec()
        );
        assert!(!token.ends_with('\n'));
    }

    #[test]
    fn max_values_fit() {
        let cursor = Cursor::new(
            ResourceType::ObjectInstance,
            Position::new(u32::MAX, u32::MAX),
            OID,
        );
        let record = raw_record(&to_token(&cursor).unwrap());
        assert!(record.len() <= MAX_RECORD_LEN);
        assert!(record.starts_with(b"1\r7\r4294967295\r4294967295\r"));
    }

    #[test]
    fn oid_first_records_are_rewritten_position_first() {
        let old = STANDARD.encode(format!("1\r6\r{OID}\r1588000000\r17"));
        let cursor = Cursor::decode(&old).unwrap();
        let record = raw_record(&to_token(&cursor).unwrap());
        assert_eq!(record, format!("1\r6\r1588000000\r17\r{OID}").into_bytes());
    }

    #[test]
    fn zero_seconds_rejected() {
        let cursor = Cursor::new(ResourceType::Host, Position::new(0, 5), OID);
        assert_eq!(to_token(&cursor), Err(CursorError::InvalidPosition));
    }

    #[test]
    fn empty_oid_rejected() {
        let cursor = Cursor::new(ResourceType::Host, Position::new(1, 1), "");
        assert_eq!(to_token(&cursor), Err(CursorError::EmptyObjectId));
    }

    #[test]
    fn unknown_type_rejected() {
        let cursor = Cursor::new(ResourceType::Unknown, Position::new(1, 1), OID);
        assert_eq!(
            to_token(&cursor),
            Err(CursorError::UnsupportedType {
                kind: ResourceType::Unknown
            })
        );
    }

    #[test]
    fn malformed_oid_rejected() {
        let cursor = Cursor::new(ResourceType::Host, Position::new(1, 1), "not-hex");
        assert_eq!(
            to_token(&cursor),
            Err(CursorError::invalid_oid("not-hex"))
        );
    }

    #[test]
    fn checks_run_in_order() {
        // Every field is bad; the position check wins.
        let cursor = Cursor::new(ResourceType::Unknown, Position::new(0, 0), "");
        assert_eq!(to_token(&cursor), Err(CursorError::InvalidPosition));

        // Position fixed; the empty oid is reported before the type.
        let cursor = Cursor::new(ResourceType::Unknown, Position::new(1, 0), "");
        assert_eq!(to_token(&cursor), Err(CursorError::EmptyObjectId));

        // Type is reported before the oid shape.
        let cursor = Cursor::new(ResourceType::Unknown, Position::new(1, 0), "xyz");
        assert!(matches!(
            to_token(&cursor),
            Err(CursorError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn zero_counter_is_allowed() {
        let cursor = Cursor::new(ResourceType::Biz, Position::new(3, 0), OID);
        assert!(to_token(&cursor).is_ok());
    }
}
