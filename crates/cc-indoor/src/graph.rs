//! Floor graph representation and builder.
//!
//! # Data layout
//!
//! Nodes live in a dense arena addressed by [`NodeId`]; edges hold index
//! pairs into that arena.  Each undirected connection is stored as two
//! directed [`Edge`]s (u→v then v→u) with identical weight, so the edge list
//! reads exactly like the adjacency it lowers into.
//!
//! A [`Graph`] is immutable once built.  An [`AdjacencyList`] taken from it
//! therefore never goes stale; a changed floor means a new build.

use cc_core::{Coord, NodeId, planar_distance};
use cc_path::AdjacencyList;

use crate::builder::BuildReport;
use crate::{IndoorError, IndoorResult};

// ── Node / Edge ───────────────────────────────────────────────────────────────

/// Role of a graph node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A vertex of a corridor polyline.
    CorridorVertex,
    /// A door.  `snapped` is set when its coordinate was moved onto its
    /// nearest node.
    Door { snapped: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub coord: Coord,
    pub kind: NodeKind,
    /// Source feature id (e.g. `p_12` for a door), when the feature had one.
    pub label: Option<String>,
    /// Index of the source feature in the floor's feature list.
    pub feature: usize,
}

impl Node {
    pub fn is_door(&self) -> bool {
        matches!(self.kind, NodeKind::Door { .. })
    }
}

/// A directed half of an undirected connection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    /// Planar distance at creation time.  Not recomputed if a door is
    /// snapped afterwards.
    pub weight: f64,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Node/edge arena for one floor.  Build with [`GraphBuilder`] or
/// [`build_indoor_graph`](crate::build_indoor_graph).
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    report: BuildReport,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges (twice the number of connections).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Summary of the build that produced this graph.
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// `true` if no edge touches `id`.
    pub fn is_isolated(&self, id: NodeId) -> bool {
        !self.edges.iter().any(|e| e.u == id || e.v == id)
    }

    /// Resolve a caller-facing node reference.
    ///
    /// Accepts a source feature label (`p_12`) or the generated form
    /// `n<index>`.  Labels win when both could match.
    pub fn resolve(&self, key: &str) -> Option<NodeId> {
        if let Some(node) = self.nodes.iter().find(|n| n.label.as_deref() == Some(key)) {
            return Some(node.id);
        }
        let index: usize = key.strip_prefix('n')?.parse().ok()?;
        self.nodes.get(index).map(|n| n.id)
    }

    /// Lower into a read-only adjacency list for the solver.
    pub fn to_adjacency(&self) -> IndoorResult<AdjacencyList> {
        let arcs = self.edges.iter().map(|e| (e.u, e.v, e.weight));
        Ok(AdjacencyList::from_arcs(self.nodes.len(), arcs)?)
    }

    /// Coordinates of `path`, in order.  Unknown ids are skipped.
    pub fn coords_of(&self, path: &[NodeId]) -> Vec<Coord> {
        path.iter().filter_map(|&id| self.node(id)).map(|n| n.coord).collect()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// The builder owns the id counter: ids run from 0 in insertion order and
/// are never shared with another builder.
///
/// # Example
///
/// ```
/// use cc_core::Coord;
/// use cc_indoor::{GraphBuilder, NodeKind};
///
/// let mut b = GraphBuilder::new();
/// let a = b.add_node(Coord::new(0.0, 0.0), NodeKind::CorridorVertex, None, 0);
/// let c = b.add_node(Coord::new(3.0, 4.0), NodeKind::CorridorVertex, None, 0);
/// assert_eq!(b.connect(a, c).unwrap(), 5.0);
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 2); // bidirectional
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    report: BuildReport,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(
        &mut self,
        coord: Coord,
        kind: NodeKind,
        label: Option<String>,
        feature: usize,
    ) -> NodeId {
        let id = NodeId::at(self.nodes.len());
        self.nodes.push(Node { id, coord, kind, label, feature });
        id
    }

    /// Connect `u` and `v` in both directions with their current planar
    /// distance as weight.  Returns the weight.
    pub fn connect(&mut self, u: NodeId, v: NodeId) -> IndoorResult<f64> {
        let (a, b) = self.endpoints(u, v)?;
        let weight = planar_distance(a, b);
        self.connect_weighted(u, v, weight)?;
        Ok(weight)
    }

    /// Connect `u` and `v` in both directions with an explicit weight.
    pub fn connect_weighted(&mut self, u: NodeId, v: NodeId, weight: f64) -> IndoorResult<()> {
        self.endpoints(u, v)?;
        self.edges.push(Edge { u, v, weight });
        self.edges.push(Edge { u: v, v: u, weight });
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub(crate) fn report_mut(&mut self) -> &mut BuildReport {
        &mut self.report
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consume the builder and produce a [`Graph`].
    pub fn build(self) -> Graph {
        Graph { nodes: self.nodes, edges: self.edges, report: self.report }
    }

    fn endpoints(&self, u: NodeId, v: NodeId) -> IndoorResult<(Coord, Coord)> {
        match (self.node(u), self.node(v)) {
            (Some(a), Some(b)) => Ok((a.coord, b.coord)),
            _ => Err(IndoorError::DanglingEdge { u, v, node_count: self.nodes.len() }),
        }
    }
}
