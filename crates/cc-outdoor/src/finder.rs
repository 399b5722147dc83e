//! Path-finding seam between the outdoor engine and the footpath graph.

use cc_core::Coord;
use cc_path::dijkstra;

use crate::network::FootpathNetwork;
use crate::OutdoorResult;

/// A planar path between two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPath {
    /// Ordered vertex positions, first to last inclusive.
    pub coords: Vec<Coord>,
    /// Sum of segment lengths.
    pub weight: f64,
}

/// Planar path-finder over a walkable network.
pub trait PathFinder {
    /// Cheapest path from `from` to `to`.
    ///
    /// Returns `Ok(None)` when either point is off the network or the two
    /// are not connected.
    fn find_path(&self, from: Coord, to: Coord) -> OutdoorResult<Option<FoundPath>>;
}

impl PathFinder for FootpathNetwork {
    fn find_path(&self, from: Coord, to: Coord) -> OutdoorResult<Option<FoundPath>> {
        let (Some(a), Some(b)) = (self.snap_to_node(from), self.snap_to_node(to)) else {
            tracing::trace!(%from, %to, "endpoint not on footpath network");
            return Ok(None);
        };
        let found = dijkstra(self.adjacency(), a, b)?.map(|path| FoundPath {
            coords: path.nodes.iter().map(|n| self.node_pos[n.index()]).collect(),
            weight: path.distance,
        });
        Ok(found)
    }
}
