//! Fluent builder for constructing a [`RoutePlanner`].

use std::sync::Arc;

use cc_core::{Feature, MetadataMap, RoutingConfig};
use cc_outdoor::FootpathNetwork;

use crate::{FloorGraph, PlanResult, RoutePlanner};

/// Fluent builder for [`RoutePlanner`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                  |
/// |--------------------|--------------------------|
/// | `.config(c)`       | `RoutingConfig::default()` |
/// | `.buildings(v)`    | no buildings             |
/// | `.footpaths(v)`    | no footpaths             |
/// | `.entrances(v)`    | no entrances             |
/// | `.bus_stops(v)`    | no bus stops             |
/// | `.metadata(m)`     | empty map                |
/// | `.floor(v)`        | no floor loaded          |
///
/// # Example
///
/// ```rust,ignore
/// let planner = RoutePlannerBuilder::new()
///     .footpaths(footpaths)
///     .entrances(entrances)
///     .metadata(metadata)
///     .build()?;
/// let route = planner.route("bldg_1", "bldg_2")?;
/// ```
#[derive(Default)]
pub struct RoutePlannerBuilder {
    config: RoutingConfig,
    buildings: Vec<Feature>,
    footpaths: Vec<Feature>,
    entrances: Vec<Feature>,
    bus_stops: Vec<Feature>,
    metadata: MetadataMap,
    floor: Option<Vec<Feature>>,
}

impl RoutePlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RoutingConfig) -> Self {
        self.config = config;
        self
    }

    /// Building footprints.  Only used for [`RoutePlanner::building_center`].
    pub fn buildings(mut self, features: Vec<Feature>) -> Self {
        self.buildings = features;
        self
    }

    /// Footpath features.  Only the network built from them is kept.
    pub fn footpaths(mut self, features: Vec<Feature>) -> Self {
        self.footpaths = features;
        self
    }

    pub fn entrances(mut self, features: Vec<Feature>) -> Self {
        self.entrances = features;
        self
    }

    pub fn bus_stops(mut self, features: Vec<Feature>) -> Self {
        self.bus_stops = features;
        self
    }

    pub fn metadata(mut self, metadata: MetadataMap) -> Self {
        self.metadata = metadata;
        self
    }

    /// Corridor and door features of the floor to load at startup.
    pub fn floor(mut self, features: Vec<Feature>) -> Self {
        self.floor = Some(features);
        self
    }

    /// Build the footpath network (and the floor graph, if one was given)
    /// and return a ready planner.
    pub fn build(self) -> PlanResult<RoutePlanner> {
        let network = FootpathNetwork::from_features(&self.footpaths, &self.config.outdoor)?;
        let floor = match &self.floor {
            Some(features) => Some(Arc::new(FloorGraph::build(features, &self.config.indoor)?)),
            None => None,
        };

        tracing::debug!(
            footpath_nodes = network.node_count(),
            entrances = self.entrances.len(),
            bus_stops = self.bus_stops.len(),
            buildings = self.metadata.len(),
            floor = floor.is_some(),
            "route planner ready"
        );

        Ok(RoutePlanner {
            config: self.config,
            buildings: self.buildings,
            entrances: self.entrances,
            bus_stops: self.bus_stops,
            metadata: self.metadata,
            network,
            floor,
        })
    }
}
