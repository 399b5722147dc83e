//! Building metadata supplied by the metadata collaborator.
//!
//! The routing engine only reads [`BuildingMetadata::entrances`]; the other
//! fields ride along for display.

use std::collections::HashMap;

/// One building's metadata record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingMetadata {
    pub building_id: String,
    /// Ids of entrance features belonging to this building.
    #[cfg_attr(feature = "serde", serde(default))]
    pub entrances: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub acronym: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
}

/// `building_id -> metadata`.
pub type MetadataMap = HashMap<String, BuildingMetadata>;
