//! Resource type listing and classification commands.

use serde::Serialize;
use watchcursor_core::ResourceType;

/// A watchable type entry for output.
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    /// Canonical name.
    pub name: ResourceType,
    /// Wire code.
    pub code: i32,
}

/// Returns the watchable types in advertised order.
pub fn watchable_types() -> Vec<TypeInfo> {
    ResourceType::watchable()
        .iter()
        .map(|kind| TypeInfo {
            name: *kind,
            code: kind.code(),
        })
        .collect()
}

/// Runs the types command.
pub fn list(format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let types = watchable_types();
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&types)?);
    } else {
        for info in &types {
            println!("{:<14} {}", info.name.as_str(), info.code);
        }
    }
    Ok(())
}

/// Runs the classify command.
pub fn classify(event_kind: &str) {
    println!("{}", ResourceType::classify(event_kind));
}
