//! Outdoor route selection.
//!
//! Every start × end candidate pair is tried and the cheapest path wins.
//! Buildings have 1–10 entrances, so this is at most ~100 path queries.

use cc_core::{Coord, Feature, OutdoorConfig, PassedPoint, RouteKind, RouteResult};

use crate::finder::{FoundPath, PathFinder};
use crate::network::FootpathNetwork;
use crate::resolve::{OutdoorRequest, resolve_endpoint};
use crate::{OutdoorError, OutdoorResult};

/// Build a footpath network from `req.footpaths` and route over it.
///
/// Prefer [`find_route_with`] with a prebuilt network when serving many
/// requests over the same footpaths.
pub fn find_outdoor_route(
    req: &OutdoorRequest<'_>,
    config: &OutdoorConfig,
) -> OutdoorResult<RouteResult> {
    let network = FootpathNetwork::from_features(req.footpaths, config)?;
    find_route_with(&network, req, config)
}

/// Route between two building / bus-stop ids using `finder`.
///
/// `req.footpaths` is not read here; the finder already embodies the
/// network.
///
/// # Errors
///
/// - [`OutdoorError::Unroutable`] if either id has no candidate coordinate.
/// - [`OutdoorError::NoRoute`] if no candidate pair is connected.
pub fn find_route_with<P: PathFinder + ?Sized>(
    finder: &P,
    req: &OutdoorRequest<'_>,
    config: &OutdoorConfig,
) -> OutdoorResult<RouteResult> {
    let start = resolve_endpoint(req.start_id, req);
    let end = resolve_endpoint(req.end_id, req);

    for (id, side) in [(req.start_id, &start), (req.end_id, &end)] {
        if side.candidates.is_empty() {
            tracing::warn!(id, kind = ?side.kind, "endpoint has no usable coordinates");
            return Err(OutdoorError::Unroutable { id: id.to_string() });
        }
    }

    // First strictly-cheaper path wins, so ties keep the earliest pair.
    let mut best: Option<(FoundPath, Coord, Coord)> = None;
    for &s in &start.candidates {
        for &e in &end.candidates {
            let Some(path) = finder.find_path(s, e)? else { continue };
            if best.as_ref().is_none_or(|(b, _, _)| path.weight < b.weight) {
                best = Some((path, s, e));
            }
        }
    }

    let Some((path, start_point, end_point)) = best else {
        tracing::warn!(
            start = req.start_id,
            end = req.end_id,
            pairs = start.candidates.len() * end.candidates.len(),
            "no footpath route between any candidate pair"
        );
        return Err(OutdoorError::NoRoute {
            start: req.start_id.to_string(),
            end: req.end_id.to_string(),
        });
    };

    tracing::debug!(
        start = req.start_id,
        end = req.end_id,
        distance = path.weight,
        vertices = path.coords.len(),
        "outdoor route found"
    );

    let passed_points = passed_bus_stops(
        &path.coords,
        req.bus_stops,
        [req.start_id, req.end_id],
        config.passed_point_tolerance,
    );
    Ok(RouteResult {
        kind: RouteKind::Outdoor,
        start_id: req.start_id.to_string(),
        end_id: req.end_id.to_string(),
        start_point,
        end_point,
        total_distance: path.weight,
        route_coords: path.coords,
        passed_points,
    })
}

/// Bus stops lying on `route` (within `tol` on both axes of some vertex),
/// in the order the route reaches them.  The route's own endpoints are not
/// reported.
fn passed_bus_stops(
    route: &[Coord],
    bus_stops: &[Feature],
    endpoints: [&str; 2],
    tol: f64,
) -> Vec<PassedPoint> {
    let mut hits: Vec<(usize, PassedPoint)> = bus_stops
        .iter()
        .filter_map(|stop| {
            let id = stop.id()?;
            if endpoints.contains(&id) {
                return None;
            }
            let coord = stop.geometry.as_point()?;
            let at = route.iter().position(|v| v.within_box(coord, tol))?;
            Some((at, PassedPoint { id: id.to_string(), coord }))
        })
        .collect();
    hits.sort_by_key(|(at, _)| *at);
    hits.into_iter().map(|(_, p)| p).collect()
}
