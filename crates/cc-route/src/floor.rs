//! A built floor: the node/edge arena plus its solver adjacency.

use cc_core::{Feature, IndoorConfig, NodeId, RouteKind, RouteResult};
use cc_indoor::{Graph, build_indoor_graph};
use cc_path::{AdjacencyList, dijkstra};

use crate::{PlanResult, RouteError};

/// Immutable floor graph shared between callers as `Arc<FloorGraph>`.
///
/// The adjacency is derived once at construction, so it always matches the
/// graph it came from.
#[derive(Clone, Debug)]
pub struct FloorGraph {
    graph: Graph,
    adjacency: AdjacencyList,
}

impl FloorGraph {
    /// Build from the corridor and door features of one floor.
    pub fn build(features: &[Feature], config: &IndoorConfig) -> PlanResult<Self> {
        let graph = build_indoor_graph(features, config)?;
        Self::from_graph(graph)
    }

    pub fn from_graph(graph: Graph) -> PlanResult<Self> {
        let adjacency = graph.to_adjacency()?;
        Ok(Self { graph, adjacency })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    /// Resolve a door/corridor reference (feature label or `n<index>`).
    pub fn resolve(&self, key: &str) -> Option<NodeId> {
        self.graph.resolve(key)
    }

    /// Shortest indoor route between two node references.
    ///
    /// # Errors
    ///
    /// - [`PathError::NodeNotInGraph`](cc_path::PathError::NodeNotInGraph)
    ///   if either reference does not name a node of this floor.
    /// - [`RouteError::NoIndoorRoute`] if the nodes are not connected.
    pub fn route(&self, start_id: &str, end_id: &str) -> PlanResult<RouteResult> {
        let start = self.resolve(start_id).unwrap_or(NodeId::INVALID);
        let end = self.resolve(end_id).unwrap_or(NodeId::INVALID);

        let Some(path) = dijkstra(&self.adjacency, start, end)? else {
            tracing::warn!(start = start_id, end = end_id, "indoor nodes are not connected");
            return Err(RouteError::NoIndoorRoute {
                start: start_id.to_string(),
                end: end_id.to_string(),
            });
        };

        let route_coords = self.graph.coords_of(&path.nodes);
        let (Some(&start_point), Some(&end_point)) = (route_coords.first(), route_coords.last())
        else {
            return Err(cc_path::PathError::NodeNotInGraph(start).into());
        };

        tracing::debug!(
            start = start_id,
            end = end_id,
            distance = path.distance,
            hops = path.nodes.len(),
            "indoor route found"
        );
        Ok(RouteResult {
            kind: RouteKind::Indoor,
            start_id: start_id.to_string(),
            end_id: end_id.to_string(),
            start_point,
            end_point,
            route_coords,
            passed_points: Vec::new(),
            total_distance: path.distance,
        })
    }
}
