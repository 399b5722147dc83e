//! Footpath network representation and builder.
//!
//! # Vertex merging
//!
//! Footpath features are separate LineStrings that meet by sharing vertex
//! coordinates.  Vertices are keyed by their coordinates rounded to
//! `vertex_precision`; every vertex with the same key becomes one network
//! node, positioned where it was first seen.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a route endpoint (entrance or bus stop) to
//! the nearest network node.  Endpoints farther than `endpoint_tolerance`
//! from every node are not on the network.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use cc_core::{Coord, Feature, Geometry, NodeId, OutdoorConfig, planar_distance, validate_precision};
use cc_path::AdjacencyList;

use crate::OutdoorResult;

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: an `[x, y]` point with the
/// associated `NodeId`.
#[derive(Clone)]
struct VertexEntry {
    point: [f64; 2],
    id: NodeId,
}

impl RTreeObject for VertexEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for VertexEntry {
    /// Squared planar distance, consistent with `planar_distance`.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── FootpathNetwork ───────────────────────────────────────────────────────────

/// Undirected walkable network built from open footpaths.
///
/// Do not construct directly; use [`FootpathNetwork::from_features`] or
/// [`FootpathNetworkBuilder`].
pub struct FootpathNetwork {
    /// Position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<Coord>,
    adjacency: AdjacencyList,
    spatial_idx: RTree<VertexEntry>,
    endpoint_tolerance: f64,
    closed_paths: usize,
}

impl FootpathNetwork {
    /// Build from footpath features.
    ///
    /// Footpaths marked `status: false` are dropped before construction.
    /// Features without line geometry are ignored.
    ///
    /// Fails with [`OutdoorError::Config`](crate::OutdoorError::Config) if
    /// `config` does not validate.
    pub fn from_features(features: &[Feature], config: &OutdoorConfig) -> OutdoorResult<Self> {
        config.validate()?;
        let mut b = FootpathNetworkBuilder::new(config.vertex_precision)?;
        let mut closed = 0;
        for feature in features {
            if !feature.is_open() {
                closed += 1;
                continue;
            }
            match &feature.geometry {
                Geometry::LineString(line) => b.add_line(line),
                Geometry::MultiLineString(lines) => lines.iter().for_each(|l| b.add_line(l)),
                _ => {}
            }
        }
        let mut net = b.build(config.endpoint_tolerance)?;
        net.closed_paths = closed;
        tracing::debug!(
            nodes = net.node_count(),
            arcs = net.arc_count(),
            closed,
            "built footpath network"
        );
        Ok(net)
    }

    /// Construct an empty network.  Every query against it finds no path.
    pub fn empty() -> Self {
        Self {
            node_pos: Vec::new(),
            adjacency: AdjacencyList::default(),
            spatial_idx: RTree::new(),
            endpoint_tolerance: 0.0,
            closed_paths: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of directed arcs (twice the number of segments).
    pub fn arc_count(&self) -> usize {
        self.adjacency.arc_count()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Footpaths excluded because they were marked closed.
    pub fn closed_paths(&self) -> usize {
        self.closed_paths
    }

    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Nearest node to `pos` within the endpoint tolerance.
    pub fn snap_to_node(&self, pos: Coord) -> Option<NodeId> {
        let entry = self.spatial_idx.nearest_neighbor(&[pos.x, pos.y])?;
        let tol = self.endpoint_tolerance;
        (entry.distance_2(&[pos.x, pos.y]) <= tol * tol).then_some(entry.id)
    }

    /// Nearest node to `pos` regardless of distance.  `None` only if the
    /// network has no nodes.
    pub fn nearest_node(&self, pos: Coord) -> Option<NodeId> {
        self.spatial_idx.nearest_neighbor(&[pos.x, pos.y]).map(|e| e.id)
    }
}

// ── FootpathNetworkBuilder ────────────────────────────────────────────────────

/// Construct a [`FootpathNetwork`] incrementally, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use cc_core::Coord;
/// use cc_outdoor::FootpathNetworkBuilder;
///
/// let mut b = FootpathNetworkBuilder::new(1e-5).unwrap();
/// b.add_line(&[Coord::new(0.0, 0.0), Coord::new(0.001, 0.0)]);
/// b.add_line(&[Coord::new(0.001, 0.0), Coord::new(0.001, 0.001)]);
/// let net = b.build(1e-5).unwrap();
/// assert_eq!(net.node_count(), 3); // shared vertex merged
/// assert_eq!(net.arc_count(), 4);  // bidirectional
/// ```
pub struct FootpathNetworkBuilder {
    precision: f64,
    nodes: Vec<Coord>,
    by_key: FxHashMap<(i64, i64), NodeId>,
    arcs: Vec<(NodeId, NodeId, f64)>,
}

impl FootpathNetworkBuilder {
    /// `precision` is the rounding step used to merge vertices.  It must be
    /// finite and strictly positive.
    pub fn new(precision: f64) -> OutdoorResult<Self> {
        validate_precision(precision)?;
        Ok(Self {
            precision,
            nodes: Vec::new(),
            by_key: FxHashMap::default(),
            arcs: Vec::new(),
        })
    }

    /// Return the node for `pos`, creating it if no vertex with the same
    /// rounded key exists yet.
    pub fn add_vertex(&mut self, pos: Coord) -> NodeId {
        let key = (
            (pos.x / self.precision).round() as i64,
            (pos.y / self.precision).round() as i64,
        );
        *self.by_key.entry(key).or_insert_with(|| {
            let id = NodeId::at(self.nodes.len());
            self.nodes.push(pos);
            id
        })
    }

    /// Add a walkable segment in both directions, weighted by planar
    /// distance between the merged node positions.  Degenerate segments
    /// (both ends on the same node) are dropped.
    pub fn add_segment(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let w = planar_distance(self.nodes[a.index()], self.nodes[b.index()]);
        self.arcs.push((a, b, w));
        self.arcs.push((b, a, w));
    }

    /// Add every consecutive segment of a polyline.  Non-finite vertices
    /// break the line.
    pub fn add_line(&mut self, line: &[Coord]) {
        let mut prev: Option<NodeId> = None;
        for &pos in line {
            if !pos.is_finite() {
                prev = None;
                continue;
            }
            let id = self.add_vertex(pos);
            if let Some(p) = prev {
                self.add_segment(p, id);
            }
            prev = Some(id);
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a [`FootpathNetwork`].
    pub fn build(self, endpoint_tolerance: f64) -> OutdoorResult<FootpathNetwork> {
        let adjacency = AdjacencyList::from_arcs(self.nodes.len(), self.arcs)?;

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<VertexEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, pos)| VertexEntry { point: [pos.x, pos.y], id: NodeId::at(i) })
            .collect();

        Ok(FootpathNetwork {
            node_pos: self.nodes,
            adjacency,
            spatial_idx: RTree::bulk_load(entries),
            endpoint_tolerance,
            closed_paths: 0,
        })
    }
}
