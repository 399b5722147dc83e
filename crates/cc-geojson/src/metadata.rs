//! Building metadata loader.
//!
//! Metadata is published either as one JSON file per building (each with a
//! `building_id`) or as a merged map `building_id -> record`.  Both shapes
//! produce the same [`MetadataMap`].

use std::path::Path;

use serde::Deserialize;

use cc_core::{BuildingMetadata, MetadataMap};

use crate::GeoJsonResult;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMetadata {
    Merged(MetadataMap),
    List(Vec<BuildingMetadata>),
    Single(BuildingMetadata),
}

/// Parse a merged map, a list of records, or a single record.
pub fn parse_metadata(json: &str) -> GeoJsonResult<MetadataMap> {
    let map = match serde_json::from_str::<RawMetadata>(json)? {
        RawMetadata::Merged(map) => map,
        RawMetadata::List(records) => {
            records.into_iter().map(|r| (r.building_id.clone(), r)).collect()
        }
        RawMetadata::Single(r) => MetadataMap::from([(r.building_id.clone(), r)]),
    };
    Ok(map)
}

/// Merge every per-building `*.json` file in `dir`.
///
/// `index.json` and `metadata.json` (the file list and a previous merge) are
/// not records and are ignored.  Empty or unparsable files are skipped with a
/// warning; a later file with the same `building_id` replaces an earlier one
/// (files are read in name order).
///
/// # Errors
///
/// Only if `dir` itself cannot be listed.
pub fn load_metadata_dir(dir: &Path) -> GeoJsonResult<MetadataMap> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .filter(|p| {
            let name = p.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            name != "index.json" && name != "metadata.json"
        })
        .collect();
    paths.sort();

    let mut merged = MetadataMap::new();
    for path in &paths {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable metadata file");
                continue;
            }
        };
        if content.trim().is_empty() {
            tracing::warn!(path = %path.display(), "skipping empty metadata file");
            continue;
        }
        match serde_json::from_str::<BuildingMetadata>(&content) {
            Ok(record) if !record.building_id.is_empty() => {
                merged.insert(record.building_id.clone(), record);
            }
            Ok(_) => tracing::warn!(path = %path.display(), "metadata file has no building_id"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "invalid metadata file"),
        }
    }

    tracing::debug!(dir = %dir.display(), files = paths.len(), buildings = merged.len(), "merged metadata");
    Ok(merged)
}
