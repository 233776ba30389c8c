//! Object identifier format check.
//!
//! Object ids are the 24-character hex form of a 12-byte ObjectID. The codec
//! only checks the shape; the value itself is opaque.

/// Length of a hex object id.
pub const OID_LEN: usize = 24;

/// Returns true if `oid` is exactly 24 lowercase hex characters.
#[must_use]
pub fn is_valid(oid: &str) -> bool {
    oid.len() == OID_LEN
        && oid
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_hex() {
        assert!(is_valid("5ea6d3f394c1f5d986e9bd86"));
        assert!(is_valid("000000000000000000000000"));
        assert!(is_valid("ffffffffffffffffffffffff"));
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(!is_valid(""));
        assert!(!is_valid("5ea6d3f394c1f5d986e9bd8"));
        assert!(!is_valid("5ea6d3f394c1f5d986e9bd860"));
        assert!(!is_valid("5EA6D3F394C1F5D986E9BD86"));
        assert!(!is_valid("5ea6d3f394c1f5d986e9bdzz"));
        assert!(!is_valid("5ea6d3f394c1f5d986e9bd8\u{e9}"));
    }
}
