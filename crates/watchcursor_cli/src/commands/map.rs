//! Map command implementation.

use std::fs;
use std::path::Path;
use tracing::info;
use watchcursor_core::{MapperConfig, Position, RawEvent, SourceMapper};

/// Loads the collection table, falling back to the standard one.
pub fn load_config(sources: Option<&Path>) -> Result<MapperConfig, Box<dyn std::error::Error>> {
    let Some(path) = sources else {
        return Ok(MapperConfig::default());
    };

    info!("Loading collection table from {:?}", path);
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Runs the map command.
pub fn run(
    collection: &str,
    seconds: u32,
    counter: u32,
    oid: &str,
    sources: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mapper = SourceMapper::new(load_config(sources)?);
    let event = RawEvent::new(Position::new(seconds, counter), oid);
    let token = mapper.token_for(collection, &event)?;
    println!("{token}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use watchcursor_core::ResourceType;

    #[test]
    fn default_table_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config, MapperConfig::default());
    }

    #[test]
    fn loads_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"collections":{{"hosts":"host"}}}}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        let mapper = SourceMapper::new(config);
        assert_eq!(mapper.resolve("hosts"), Some(ResourceType::Host));
        assert_eq!(mapper.resolve("cc_HostBase"), None);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = Path::new("/nonexistent/watchcursor/sources.json");
        assert!(load_config(Some(path)).is_err());
    }
}
