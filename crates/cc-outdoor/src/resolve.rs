//! Endpoint resolution: identifier → candidate coordinates.
//!
//! A building id with metadata resolves to all of its non-elevator
//! entrances.  Otherwise a bus stop id resolves to the stop's coordinate.
//! Start and end go through the same function, so both sides accept both
//! kinds.

use cc_core::{Coord, Feature, MetadataMap};

/// Everything an outdoor route request needs.
#[derive(Clone, Copy, Debug)]
pub struct OutdoorRequest<'a> {
    pub start_id: &'a str,
    pub end_id: &'a str,
    pub entrances: &'a [Feature],
    pub footpaths: &'a [Feature],
    pub bus_stops: &'a [Feature],
    pub metadata: &'a MetadataMap,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndpointKind {
    Building,
    BusStop,
    Unknown,
}

/// Candidate coordinates for one side of a route.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEndpoint {
    pub kind: EndpointKind,
    pub candidates: Vec<Coord>,
}

/// Resolve `id` against the request's metadata, entrances and bus stops.
///
/// A known building whose entrances are all elevators (or missing from the
/// entrance layer) resolves with zero candidates.
pub fn resolve_endpoint(id: &str, req: &OutdoorRequest<'_>) -> ResolvedEndpoint {
    if let Some(meta) = req.metadata.get(id) {
        let candidates = req
            .entrances
            .iter()
            .filter(|f| f.id().is_some_and(|eid| meta.entrances.iter().any(|m| m == eid)))
            .filter(|f| !f.is_elevator())
            .filter_map(|f| f.geometry.as_point())
            .collect();
        return ResolvedEndpoint { kind: EndpointKind::Building, candidates };
    }

    if let Some(stop) = req.bus_stops.iter().find(|f| f.id() == Some(id)) {
        return ResolvedEndpoint {
            kind: EndpointKind::BusStop,
            candidates: stop.geometry.as_point().into_iter().collect(),
        };
    }

    ResolvedEndpoint { kind: EndpointKind::Unknown, candidates: Vec::new() }
}
