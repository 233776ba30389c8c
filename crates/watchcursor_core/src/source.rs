//! Mapping raw source events to cursors.

use crate::config::MapperConfig;
use crate::cursor::Cursor;
use crate::error::{CursorError, CursorResult};
use crate::position::Position;
use crate::resource::ResourceType;
use std::collections::HashMap;
use tracing::error;

/// The parts of a change-stream event a cursor is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    /// Position assigned by the source.
    pub position: Position,
    /// Hex object id of the changed document.
    pub oid: String,
}

impl RawEvent {
    /// Creates a raw event.
    pub fn new(position: Position, oid: impl Into<String>) -> Self {
        Self {
            position,
            oid: oid.into(),
        }
    }
}

/// Resolves source collections to resource types and builds cursors.
///
/// An unmapped collection is a configuration problem, not a forward
/// compatibility case, so it is reported as an error instead of degrading
/// to [`ResourceType::Unknown`].
#[derive(Debug, Clone)]
pub struct SourceMapper {
    collections: HashMap<String, ResourceType>,
}

impl Default for SourceMapper {
    fn default() -> Self {
        Self::new(MapperConfig::default())
    }
}

impl SourceMapper {
    /// Creates a mapper from a configuration.
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        Self {
            collections: config.collections.into_iter().collect(),
        }
    }

    /// Returns the resource type fed by `collection`, if any.
    #[must_use]
    pub fn resolve(&self, collection: &str) -> Option<ResourceType> {
        self.collections.get(collection).copied()
    }

    /// Builds the cursor for an event from `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::UnsupportedSource`] if the collection is not
    /// mapped, or the encode validation error if the event cannot be turned
    /// into a valid cursor.
    pub fn cursor_for(&self, collection: &str, event: &RawEvent) -> CursorResult<Cursor> {
        let Some(kind) = self.resolve(collection) else {
            error!(
                collection,
                oid = %event.oid,
                "unsupported cursor type collection"
            );
            return Err(CursorError::unsupported_source(collection));
        };

        let cursor = Cursor::new(kind, event.position, event.oid.clone());
        cursor.validate()?;
        Ok(cursor)
    }

    /// Builds and encodes the cursor for an event from `collection`.
    ///
    /// # Errors
    ///
    /// Same as [`SourceMapper::cursor_for`].
    pub fn token_for(&self, collection: &str, event: &RawEvent) -> CursorResult<String> {
        let cursor = self.cursor_for(collection, event)?;
        cursor.encode().map_err(|err| {
            error!(error = %err, oid = %event.oid, "encode event cursor failed");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BIZ_COLLECTION, HOST_COLLECTION, HOST_RELATION_COLLECTION};

    const OID: &str = "aaaaaaaaaaaaaaaaaaaaaaaa";

    #[test]
    fn host_event() {
        let mapper = SourceMapper::default();
        let event = RawEvent::new(Position::new(100, 3), OID);

        let cursor = mapper.cursor_for(HOST_COLLECTION, &event).unwrap();
        assert_eq!(
            cursor,
            Cursor::new(ResourceType::Host, Position::new(100, 3), OID)
        );

        let token = mapper.token_for(HOST_COLLECTION, &event).unwrap();
        assert_eq!(Cursor::decode(&token).unwrap(), cursor);
    }

    #[test]
    fn resolves_default_table() {
        let mapper = SourceMapper::default();
        assert_eq!(
            mapper.resolve(HOST_RELATION_COLLECTION),
            Some(ResourceType::HostRelation)
        );
        assert_eq!(mapper.resolve(BIZ_COLLECTION), Some(ResourceType::Biz));
        assert_eq!(mapper.resolve("cc_HostBase_archive"), None);
    }

    #[test]
    fn unmapped_collection_is_an_error() {
        let mapper = SourceMapper::default();
        let event = RawEvent::new(Position::new(100, 3), OID);
        assert_eq!(
            mapper.cursor_for("cc_AuditLog", &event),
            Err(CursorError::unsupported_source("cc_AuditLog"))
        );
        assert_eq!(
            mapper.token_for("cc_AuditLog", &event),
            Err(CursorError::unsupported_source("cc_AuditLog"))
        );
    }

    #[test]
    fn encode_failures_propagate() {
        let mapper = SourceMapper::default();

        let unset = RawEvent::new(Position::default(), OID);
        assert_eq!(
            mapper.cursor_for(HOST_COLLECTION, &unset),
            Err(CursorError::InvalidPosition)
        );

        let no_oid = RawEvent::new(Position::new(5, 0), "");
        assert_eq!(
            mapper.token_for(HOST_COLLECTION, &no_oid),
            Err(CursorError::EmptyObjectId)
        );
    }

    #[test]
    fn custom_table() {
        let config = MapperConfig::empty().with_collection("hosts_v2", ResourceType::Host);
        let mapper = SourceMapper::new(config);
        let event = RawEvent::new(Position::new(7, 1), OID);

        assert!(mapper.cursor_for("hosts_v2", &event).is_ok());
        assert!(mapper.cursor_for(HOST_COLLECTION, &event).is_err());
    }

    #[test]
    fn mapping_to_unencodable_type_fails_on_encode() {
        let config = MapperConfig::empty().with_collection("odd", ResourceType::Unknown);
        let mapper = SourceMapper::new(config);
        let event = RawEvent::new(Position::new(7, 1), OID);

        assert_eq!(
            mapper.cursor_for("odd", &event),
            Err(CursorError::UnsupportedType {
                kind: ResourceType::Unknown
            })
        );
    }
}
