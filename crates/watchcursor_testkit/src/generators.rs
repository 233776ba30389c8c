//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random test data
//! that maintains required invariants.

use proptest::prelude::*;
use watchcursor_core::{Cursor, Position, ResourceType};

/// Strategy for generating well-formed object ids.
pub fn oid_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-f]{24}").expect("Invalid regex")
}

/// Strategy for generating positions that can be encoded.
pub fn position_strategy() -> impl Strategy<Value = Position> {
    (1u32.., any::<u32>()).prop_map(|(seconds, counter)| Position::new(seconds, counter))
}

/// Strategy for generating the advertised watchable types.
pub fn watchable_kind_strategy() -> impl Strategy<Value = ResourceType> {
    prop::sample::select(ResourceType::watchable().to_vec())
}

/// Strategy for generating every type with a wire code.
pub fn encodable_kind_strategy() -> impl Strategy<Value = ResourceType> {
    prop_oneof![
        1 => Just(ResourceType::NoEvent),
        6 => watchable_kind_strategy(),
    ]
}

/// Strategy for generating cursors that satisfy the encode invariants.
pub fn cursor_strategy() -> impl Strategy<Value = Cursor> {
    (encodable_kind_strategy(), position_strategy(), oid_strategy())
        .prop_map(|(kind, position, oid)| Cursor::new(kind, position, oid))
}

/// Strategy for generating type codes this build does not recognize.
pub fn unknown_code_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..=0, 8i64..=i64::MAX]
}

/// Strategy for generating arbitrary token-like text.
pub fn token_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9+/=]{0,80}").expect("Invalid regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_cursors_are_valid(cursor in cursor_strategy()) {
            prop_assert!(cursor.validate().is_ok());
        }

        #[test]
        fn unknown_codes_are_unknown(code in unknown_code_strategy()) {
            prop_assert_eq!(ResourceType::from_code(code), ResourceType::Unknown);
        }
    }
}
