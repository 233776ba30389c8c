//! Cursor token decoder.

use crate::cursor::Cursor;
use crate::error::{CursorError, CursorResult};
use crate::position::Position;
use crate::resource::ResourceType;
use crate::{oid, CURSOR_VERSION, FIELD_COUNT, FIELD_SEPARATOR};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::str::FromStr;
use tracing::debug;

/// Where the oid sits in a version 1 record.
///
/// The encoder writes `PositionFirst`. `OidFirst` records carry the same
/// fields with the oid moved ahead of the position; they are read so that
/// tokens from either arrangement resume correctly. The two cannot be
/// confused: an oid is always 24 characters and a u32 at most 10 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    /// `version, code, seconds, counter, oid`
    PositionFirst,
    /// `version, code, oid, seconds, counter`
    OidFirst,
}

/// Decode a token into a cursor.
///
/// Decoding is structural only. A well-formed token with a type code this
/// build does not know decodes to [`ResourceType::Unknown`], and no
/// cross-field checks are applied.
///
/// # Errors
///
/// - [`CursorError::MalformedToken`] for bad base64, a field count other
///   than five, a non-numeric field, or a badly shaped oid
/// - [`CursorError::UnsupportedVersion`] if the version field is not `"1"`
pub fn from_token(token: &str) -> CursorResult<Cursor> {
    let bytes = STANDARD.decode(token).map_err(|err| {
        debug!(error = %err, "rejecting cursor: base64 decode failed");
        CursorError::malformed(format!("base64 decode failed: {err}"))
    })?;

    let fields: Vec<&[u8]> = bytes.split(|b| *b == FIELD_SEPARATOR).collect();
    let [version, code, third, fourth, fifth] = fields.as_slice() else {
        debug!(
            fields = fields.len(),
            expected = FIELD_COUNT,
            "rejecting cursor: wrong field count"
        );
        return Err(CursorError::malformed("invalid cursor string"));
    };

    if *version != CURSOR_VERSION.as_bytes() {
        let version = String::from_utf8_lossy(version);
        debug!(%version, "rejecting cursor: unsupported version");
        return Err(CursorError::unsupported_version(version));
    }

    let code: i64 = parse_field(code, "type")?;
    let kind = ResourceType::from_code(code);

    let (oid, seconds, counter) = match field_order(third, fifth) {
        FieldOrder::PositionFirst => (fifth, third, fourth),
        FieldOrder::OidFirst => (third, fourth, fifth),
    };

    let oid = field_text(oid, "oid")?;
    if !oid::is_valid(oid) {
        debug!(%oid, "rejecting cursor: invalid oid");
        return Err(CursorError::malformed(format!("invalid oid: {oid}")));
    }

    let seconds = parse_unsigned(seconds, "seconds")?;
    let counter = parse_unsigned(counter, "counter")?;

    Ok(Cursor::new(kind, Position::new(seconds, counter), oid))
}

fn field_order(third: &[u8], fifth: &[u8]) -> FieldOrder {
    let is_oid = |field: &[u8]| std::str::from_utf8(field).is_ok_and(oid::is_valid);
    if is_oid(fifth) && !is_oid(third) {
        FieldOrder::PositionFirst
    } else {
        FieldOrder::OidFirst
    }
}

fn field_text<'a>(field: &'a [u8], name: &str) -> CursorResult<&'a str> {
    std::str::from_utf8(field)
        .map_err(|_| CursorError::malformed(format!("invalid {name} field: not UTF-8")))
}

fn parse_field<T>(field: &[u8], name: &str) -> CursorResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let text = field_text(field, name)?;
    text.parse().map_err(|err| {
        debug!(field = name, value = %text, "rejecting cursor: bad numeric field");
        CursorError::malformed(format!("invalid {name} field {text:?}: {err}"))
    })
}

/// Position fields are plain decimal digits; no sign is allowed.
fn parse_unsigned(field: &[u8], name: &str) -> CursorResult<u32> {
    if field.is_empty() || !field.iter().all(u8::is_ascii_digit) {
        let text = String::from_utf8_lossy(field);
        debug!(field = name, value = %text, "rejecting cursor: non-digit position field");
        return Err(CursorError::malformed(format!(
            "invalid {name} field {text:?}: expected decimal digits"
        )));
    }
    parse_field(field, name)
}
