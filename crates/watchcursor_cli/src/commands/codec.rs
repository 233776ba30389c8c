//! Encode, decode and sentinel commands.

use serde::Serialize;
use tracing::debug;
use watchcursor_core::{no_event_cursor, no_event_token, Cursor, Position, ResourceType};

/// Decoded cursor representation for output.
#[derive(Debug, Serialize)]
pub struct CursorInfo {
    /// The token the cursor was read from.
    pub token: String,
    /// Canonical resource type name.
    pub kind: ResourceType,
    /// Wire code of the resource type.
    pub code: i32,
    /// Position seconds.
    pub seconds: u32,
    /// Position counter.
    pub counter: u32,
    /// Object id.
    pub oid: String,
    /// Whether this is the no-event cursor.
    pub no_event: bool,
}

impl CursorInfo {
    fn new(token: &str, cursor: &Cursor) -> Self {
        Self {
            token: token.to_string(),
            kind: cursor.kind,
            code: cursor.kind.code(),
            seconds: cursor.position.seconds,
            counter: cursor.position.counter,
            oid: cursor.oid.clone(),
            no_event: cursor.is_no_event(),
        }
    }
}

/// Builds and encodes a cursor from its parts.
pub fn encode_token(
    kind: &str,
    seconds: u32,
    counter: u32,
    oid: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let kind: ResourceType = kind.parse()?;
    let cursor = Cursor::new(kind, Position::new(seconds, counter), oid);
    Ok(cursor.encode()?)
}

/// Renders a cursor in the requested format.
pub fn render(info: &CursorInfo, format: &str) -> Result<String, Box<dyn std::error::Error>> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(info)?);
    }

    let mut out = String::new();
    out.push_str(&format!("Token:    {}\n", info.token));
    out.push_str(&format!("Type:     {} (code {})\n", info.kind, info.code));
    out.push_str(&format!("Position: ({}, {})\n", info.seconds, info.counter));
    out.push_str(&format!("Oid:      {}\n", info.oid));
    out.push_str(&format!("No event: {}", info.no_event));
    Ok(out)
}

/// Runs the encode command.
pub fn encode(
    kind: &str,
    seconds: u32,
    counter: u32,
    oid: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let token = encode_token(kind, seconds, counter, oid)?;
    println!("{token}");
    Ok(())
}

/// Runs the decode command.
pub fn decode(token: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Decoding cursor {token}");
    let cursor = Cursor::decode(token)?;
    println!("{}", render(&CursorInfo::new(token, &cursor), format)?);
    Ok(())
}

/// Runs the sentinel command.
pub fn sentinel(format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let token = no_event_token();
    if format == "json" {
        println!(
            "{}",
            render(&CursorInfo::new(token, &no_event_cursor()), format)?
        );
    } else {
        println!("{token}");
    }
    Ok(())
}
