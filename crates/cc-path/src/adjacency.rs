//! Read-only neighbour lists.
//!
//! An [`AdjacencyList`] is a snapshot: it is built once from a finished
//! graph and has no mutators afterwards.  Rebuild it when the graph changes.

use cc_core::NodeId;

use crate::{PathError, PathResult};

/// One outgoing arc.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub to: NodeId,
    pub weight: f64,
}

/// Outgoing arcs per node, indexed by `NodeId`.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyList {
    lists: Vec<Vec<Neighbor>>,
}

impl AdjacencyList {
    /// Build from directed arcs `(from, to, weight)` over `node_count` nodes.
    ///
    /// Undirected graphs pass both directions.  Every node gets an entry,
    /// including isolated ones, so membership is simply `id < node_count`.
    ///
    /// # Errors
    ///
    /// [`PathError::NodeNotInGraph`] if an arc names a node `>= node_count`;
    /// [`PathError::InvalidWeight`] for negative or non-finite weights.
    pub fn from_arcs<I>(node_count: usize, arcs: I) -> PathResult<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        let mut lists = vec![Vec::new(); node_count];
        for (from, to, weight) in arcs {
            if to.index() >= node_count {
                return Err(PathError::NodeNotInGraph(to));
            }
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(PathError::InvalidWeight { from, to, weight });
            }
            lists
                .get_mut(from.index())
                .ok_or(PathError::NodeNotInGraph(from))?
                .push(Neighbor { to, weight });
        }
        Ok(Self { lists })
    }

    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Total number of directed arcs.
    pub fn arc_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.lists.len()
    }

    /// Outgoing arcs of `node`, or `None` if the node is not in the graph.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> Option<&[Neighbor]> {
        self.lists.get(node.index()).map(Vec::as_slice)
    }

    /// `true` if `node` has at least one arc.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.neighbors(node).is_some_and(|n| !n.is_empty())
    }
}
