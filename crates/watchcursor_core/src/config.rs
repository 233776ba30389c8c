//! Source mapper configuration.

use crate::resource::ResourceType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Collection holding host records.
pub const HOST_COLLECTION: &str = "cc_HostBase";
/// Collection holding host to module relations.
pub const HOST_RELATION_COLLECTION: &str = "cc_ModuleHostConfig";
/// Collection holding business records.
pub const BIZ_COLLECTION: &str = "cc_ApplicationBase";
/// Collection holding set records.
pub const SET_COLLECTION: &str = "cc_SetBase";
/// Collection holding module records.
pub const MODULE_COLLECTION: &str = "cc_ModuleBase";
/// Collection holding object instances.
pub const OBJECT_COLLECTION: &str = "cc_ObjectBase";

/// Which source collections feed which resource types.
///
/// Deserializes from a map of collection name to canonical type name:
///
/// ```json
/// { "collections": { "cc_HostBase": "host", "cc_SetBase": "set" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Collection name to resource type.
    pub collections: BTreeMap<String, ResourceType>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        let collections = [
            (HOST_COLLECTION, ResourceType::Host),
            (HOST_RELATION_COLLECTION, ResourceType::HostRelation),
            (BIZ_COLLECTION, ResourceType::Biz),
            (SET_COLLECTION, ResourceType::Set),
            (MODULE_COLLECTION, ResourceType::Module),
            (OBJECT_COLLECTION, ResourceType::ObjectInstance),
        ]
        .into_iter()
        .map(|(name, kind)| (name.to_string(), kind))
        .collect();

        Self { collections }
    }
}

impl MapperConfig {
    /// Creates a configuration with the standard collection table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with no collections.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            collections: BTreeMap::new(),
        }
    }

    /// Maps a collection to a resource type, replacing any previous entry.
    #[must_use]
    pub fn with_collection(mut self, name: impl Into<String>, kind: ResourceType) -> Self {
        self.collections.insert(name.into(), kind);
        self
    }

    /// Removes a collection from the table.
    #[must_use]
    pub fn without_collection(mut self, name: &str) -> Self {
        self.collections.remove(name);
        self
    }
}
