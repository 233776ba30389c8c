//! The "no event yet" cursor.
//!
//! Watchers that have not seen any event are handed this token. When it
//! comes back, the server resumes from the head of the stream instead of
//! looking up a position.

use crate::cursor::Cursor;
use crate::position::Position;
use crate::resource::ResourceType;
use std::sync::LazyLock;
use tracing::info;

/// Object id carried by the no-event cursor.
pub const NO_EVENT_OID: &str = "5ea6d3f394c1f5d986e9bd86";

/// Position carried by the no-event cursor.
pub const NO_EVENT_POSITION: Position = Position::new(1, 1);

/// The encoded no-event cursor.
///
/// Evaluated once on first access. Call [`init`] during startup to force it
/// early. If the codec cannot encode this fixed value the build is broken,
/// so initialization panics.
pub static NO_EVENT_TOKEN: LazyLock<String> = LazyLock::new(|| {
    let token = no_event_cursor()
        .encode()
        .unwrap_or_else(|err| panic!("initial no-event cursor failed: {err}"));
    info!(%token, "no-event cursor initialized");
    token
});

/// Returns the no-event cursor value.
#[must_use]
pub fn no_event_cursor() -> Cursor {
    Cursor::new(ResourceType::NoEvent, NO_EVENT_POSITION, NO_EVENT_OID)
}

/// Returns the encoded no-event token.
#[must_use]
pub fn no_event_token() -> &'static str {
    NO_EVENT_TOKEN.as_str()
}

/// Returns true if `token` is the no-event token.
#[must_use]
pub fn is_no_event(token: &str) -> bool {
    token == no_event_token()
}

/// Forces the no-event token to be computed.
///
/// # Panics
///
/// Panics if the no-event cursor cannot be encoded.
pub fn init() {
    LazyLock::force(&NO_EVENT_TOKEN);
}
