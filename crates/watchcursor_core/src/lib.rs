//! # watchcursor core
//!
//! Resume cursors for change-event watch streams.
//!
//! A cursor names an exact event in a watch stream: the kind of resource it
//! belongs to, the source's logical position, and the changed object's id.
//! Cursors travel as opaque base64 tokens and can be handed back later to
//! resume the stream.
//!
//! ## Token format
//!
//! A token is the base64 (standard alphabet, padded) encoding of five
//! carriage-return separated fields:
//!
//! ```text
//! version \r type-code \r seconds \r counter \r object-id
//! ```
//!
//! The version is currently `"1"`. Decoding rejects any other version.
//! Records with the object id ahead of the position (`version \r type-code
//! \r object-id \r seconds \r counter`) are also read, but never written, so
//! readers that only understand that arrangement cannot read these tokens.
//! Unknown type codes decode to [`ResourceType::Unknown`] rather than failing.
//!
//! ## Usage
//!
//! ```
//! use watchcursor_core::{Cursor, Position, RawEvent, ResourceType, SourceMapper};
//!
//! let mapper = SourceMapper::default();
//! let event = RawEvent::new(Position::new(100, 3), "aaaaaaaaaaaaaaaaaaaaaaaa");
//! let token = mapper.token_for("cc_HostBase", &event).unwrap();
//!
//! let cursor = Cursor::decode(&token).unwrap();
//! assert_eq!(cursor.kind, ResourceType::Host);
//! assert!(!watchcursor_core::is_no_event(&token));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod cursor;
mod decoder;
mod encoder;
mod error;
pub mod oid;
mod position;
mod resource;
mod sentinel;
mod source;

pub use config::{
    MapperConfig, BIZ_COLLECTION, HOST_COLLECTION, HOST_RELATION_COLLECTION, MODULE_COLLECTION,
    OBJECT_COLLECTION, SET_COLLECTION,
};
pub use cursor::Cursor;
pub use decoder::from_token;
pub use encoder::{to_token, validate};
pub use error::{CursorError, CursorResult};
pub use position::Position;
pub use resource::{ResourceType, NO_CODE};
pub use sentinel::{
    init, is_no_event, no_event_cursor, no_event_token, NO_EVENT_OID, NO_EVENT_POSITION,
    NO_EVENT_TOKEN,
};
pub use source::{RawEvent, SourceMapper};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version field written into every token.
pub const CURSOR_VERSION: &str = "1";

/// Byte separating the fields of a token record.
pub const FIELD_SEPARATOR: u8 = b'\r';

/// Number of fields in a token record.
pub const FIELD_COUNT: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encodable_kind() -> impl Strategy<Value = ResourceType> {
        prop::sample::select(vec![
            ResourceType::NoEvent,
            ResourceType::Host,
            ResourceType::HostRelation,
            ResourceType::Biz,
            ResourceType::Set,
            ResourceType::Module,
            ResourceType::ObjectInstance,
        ])
    }

    fn oid_strategy() -> impl Strategy<Value = String> {
        "[0-9a-f]{24}"
    }

    proptest! {
        #[test]
        fn roundtrip(kind in encodable_kind(), seconds in 1u32.., counter in any::<u32>(), oid in oid_strategy()) {
            let cursor = Cursor::new(kind, Position::new(seconds, counter), oid);
            let token = cursor.encode().unwrap();
            prop_assert_eq!(Cursor::decode(&token).unwrap(), cursor);
        }

        #[test]
        fn encode_is_deterministic(kind in encodable_kind(), seconds in 1u32.., counter in any::<u32>(), oid in oid_strategy()) {
            let cursor = Cursor::new(kind, Position::new(seconds, counter), oid);
            prop_assert_eq!(cursor.encode().unwrap(), cursor.encode().unwrap());
        }

        #[test]
        fn decode_never_panics(input in ".{0,64}") {
            let _ = Cursor::decode(&input);
        }

        #[test]
        fn decoded_order_matches_position_order(
            a in (1u32.., any::<u32>()),
            b in (1u32.., any::<u32>()),
        ) {
            let oid = "aaaaaaaaaaaaaaaaaaaaaaaa";
            let ca = Cursor::new(ResourceType::Host, a.into(), oid);
            let cb = Cursor::new(ResourceType::Host, b.into(), oid);
            let da = Cursor::decode(&ca.encode().unwrap()).unwrap();
            let db = Cursor::decode(&cb.encode().unwrap()).unwrap();
            prop_assert_eq!(da.position.cmp(&db.position), Position::from(a).cmp(&Position::from(b)));
        }
    }
}
