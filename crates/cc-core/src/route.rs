//! The route shape handed back to the display layer.

use crate::geo::Coord;

/// Which engine produced a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RouteKind {
    Outdoor,
    Indoor,
}

/// A named point lying on a route (e.g. a bus stop the walk goes past).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassedPoint {
    pub id: String,
    pub coord: Coord,
}

/// A computed route.  Immutable once produced; owned by the caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    pub kind: RouteKind,
    /// Identifier the caller asked to start from (building, bus stop or node).
    pub start_id: String,
    pub end_id: String,
    /// Concrete coordinate the route leaves from (e.g. the chosen entrance).
    pub start_point: Coord,
    pub end_point: Coord,
    /// Ordered polyline from `start_point` to `end_point` inclusive.
    pub route_coords: Vec<Coord>,
    pub passed_points: Vec<PassedPoint>,
    pub total_distance: f64,
}

impl RouteResult {
    /// `true` if the route has no length (start and end coincide).
    pub fn is_trivial(&self) -> bool {
        self.route_coords.len() <= 1
    }
}
