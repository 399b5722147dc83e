//! The campus route planner.

use std::sync::Arc;

use cc_core::{Feature, FeatureRole, LatLng, MetadataMap, RouteResult, RoutingConfig, feature_center};
use cc_outdoor::{FootpathNetwork, OutdoorRequest, find_route_with};

use crate::{FloorGraph, PlanResult, RouteError};

/// Dispatches route requests to the indoor or outdoor engine.
///
/// Outdoor data is fixed for the planner's lifetime; the footpath network is
/// built once by [`RoutePlannerBuilder`](crate::RoutePlannerBuilder).  The
/// active floor can be swapped with [`load_floor`](Self::load_floor).
pub struct RoutePlanner {
    pub(crate) config: RoutingConfig,
    pub(crate) buildings: Vec<Feature>,
    pub(crate) entrances: Vec<Feature>,
    pub(crate) bus_stops: Vec<Feature>,
    pub(crate) metadata: MetadataMap,
    pub(crate) network: FootpathNetwork,
    pub(crate) floor: Option<Arc<FloorGraph>>,
}

impl RoutePlanner {
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    pub fn network(&self) -> &FootpathNetwork {
        &self.network
    }

    pub fn metadata(&self) -> &MetadataMap {
        &self.metadata
    }

    /// The active floor, if any.  Holding the returned `Arc` keeps that
    /// floor alive and unchanged across later [`load_floor`](Self::load_floor)
    /// calls.
    pub fn floor(&self) -> Option<Arc<FloorGraph>> {
        self.floor.clone()
    }

    /// Build a floor graph from `features` and make it the active floor.
    pub fn load_floor(&mut self, features: &[Feature]) -> PlanResult<Arc<FloorGraph>> {
        let floor = Arc::new(FloorGraph::build(features, &self.config.indoor)?);
        let r = floor.graph().report();
        tracing::info!(
            nodes = floor.graph().node_count(),
            doors = r.door_nodes,
            isolated = r.isolated_doors.len(),
            "loaded floor"
        );
        self.floor = Some(Arc::clone(&floor));
        Ok(floor)
    }

    pub fn clear_floor(&mut self) {
        self.floor = None;
    }

    /// Map-marker position of a building: the bounding-box midpoint of its
    /// footprint.
    pub fn building_center(&self, building_id: &str) -> Option<LatLng> {
        self.buildings
            .iter()
            .find(|f| matches!(&f.role, FeatureRole::Building { building_id: id, .. } if id == building_id))
            .and_then(feature_center)
    }

    /// Plan a route between two identifiers.
    ///
    /// When both ids name nodes of the active floor the route is indoor.
    /// Everything else (building ids, bus stop ids, or a mix) goes through
    /// the outdoor engine.
    ///
    /// # Errors
    ///
    /// - [`RouteError::EmptyIdentifier`] if either id is blank.
    /// - [`RouteError::NoIndoorRoute`] for disconnected floor nodes.
    /// - [`RouteError::Outdoor`] for unroutable or unconnected outdoor
    ///   requests.
    pub fn route(&self, start_id: &str, end_id: &str) -> PlanResult<RouteResult> {
        let start_id = start_id.trim();
        let end_id = end_id.trim();
        for (side, id) in [("start", start_id), ("end", end_id)] {
            if id.is_empty() {
                tracing::warn!(side, "empty route identifier");
                return Err(RouteError::EmptyIdentifier { side });
            }
        }

        if let Some(floor) = &self.floor {
            if floor.resolve(start_id).is_some() && floor.resolve(end_id).is_some() {
                return floor.route(start_id, end_id);
            }
        }

        let req = OutdoorRequest {
            start_id,
            end_id,
            entrances: &self.entrances,
            // The prebuilt network stands in for the footpath layer.
            footpaths: &[],
            bus_stops: &self.bus_stops,
            metadata: &self.metadata,
        };
        Ok(find_route_with(&self.network, &req, &self.config.outdoor)?)
    }
}
