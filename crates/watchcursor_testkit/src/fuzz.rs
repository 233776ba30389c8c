//! Fuzz testing harnesses for watchcursor.
//!
//! This module provides fuzz targets that can be used with cargo-fuzz
//! or other fuzzing frameworks.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use watchcursor_core::Cursor;

/// Fuzz target for token decoding.
///
/// Arbitrary input must either decode or return an error, never panic.
/// The input is tried both as token text and as a raw record.
pub fn fuzz_token_decode(data: &[u8]) {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Cursor::decode(text);
    }
    let _ = Cursor::decode(&STANDARD.encode(data));
}

/// Fuzz target for decode/encode stability.
///
/// Any record that decodes to an encodable cursor must re-encode to a
/// token that decodes to the same cursor.
pub fn fuzz_token_roundtrip(data: &[u8]) {
    let Ok(cursor) = Cursor::decode(&STANDARD.encode(data)) else {
        return;
    };
    if let Ok(token) = cursor.encode() {
        let decoded = Cursor::decode(&token).expect("re-encoded token must decode");
        assert_eq!(decoded, cursor, "Roundtrip mismatch");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{record_token, HOST_OID};

    #[test]
    fn survives_garbage() {
        let inputs: [&[u8]; 6] = [
            b"",
            b"\r\r\r\r",
            b"1\r2\r3\r4\r5",
            b"\xff\xfe\r\x00",
            b"MQ0xDTENMQ01ZWE2ZDNmMzk0YzFmNWQ5ODZlOWJkODY=",
            b"1\r2\raaaaaaaaaaaaaaaaaaaaaaaa\r100\r3",
        ];
        for input in inputs {
            fuzz_token_decode(input);
            fuzz_token_roundtrip(input);
        }
    }

    #[test]
    fn oid_first_records_reencode() {
        let token = record_token(&["1", "5", HOST_OID, "9", "8"]);
        let raw = STANDARD.decode(token).unwrap();
        fuzz_token_roundtrip(&raw);
    }
}
