//! Dijkstra's algorithm over an [`AdjacencyList`].
//!
//! # Tie-breaking
//!
//! Heap entries carry a push sequence number as secondary key, so among equal
//! tentative distances the entry pushed first is settled first.  Results are
//! reproducible for a given graph and query; nothing stronger is promised.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use cc_core::NodeId;

use crate::adjacency::AdjacencyList;
use crate::{PathError, PathResult};

// ── ShortestPath ──────────────────────────────────────────────────────────────

/// Node sequence from source to destination inclusive, plus its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub nodes: Vec<NodeId>,
    pub distance: f64,
}

impl ShortestPath {
    /// `true` if source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }
}

// ── Heap entry ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct Candidate {
    cost: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    /// Reversed on both keys so `BinaryHeap` (a max-heap) pops the cheapest,
    /// earliest-pushed entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Shortest path from `start` to `end`.
///
/// Returns `Ok(None)` when `end` is unreachable from `start`; that is an
/// expected outcome, not a failure.  `start == end` yields a one-node path
/// of distance zero.
///
/// # Errors
///
/// [`PathError::NodeNotInGraph`] if either endpoint is absent from `adj`,
/// so a bad id is never mistaken for a disconnected graph.
pub fn dijkstra(
    adj: &AdjacencyList,
    start: NodeId,
    end: NodeId,
) -> PathResult<Option<ShortestPath>> {
    if !adj.contains(start) {
        return Err(PathError::NodeNotInGraph(start));
    }
    if !adj.contains(end) {
        return Err(PathError::NodeNotInGraph(end));
    }
    if start == end {
        return Ok(Some(ShortestPath { nodes: vec![start], distance: 0.0 }));
    }

    let n = adj.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![NodeId::INVALID; n];
    let mut seq = 0u64;

    dist[start.index()] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(Candidate { cost: 0.0, seq, node: start });

    while let Some(Candidate { cost, node, .. }) = heap.pop() {
        if node == end {
            return Ok(Some(reconstruct(&prev, start, end, cost)));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for arc in adj.neighbors(node).unwrap_or(&[]) {
            let next = cost + arc.weight;
            if next < dist[arc.to.index()] {
                dist[arc.to.index()] = next;
                prev[arc.to.index()] = node;
                seq += 1;
                heap.push(Candidate { cost: next, seq, node: arc.to });
            }
        }
    }

    tracing::debug!(%start, %end, "target not reachable");
    Ok(None)
}

fn reconstruct(prev: &[NodeId], start: NodeId, end: NodeId, distance: f64) -> ShortestPath {
    let mut nodes = vec![end];
    let mut cur = end;
    while cur != start {
        cur = prev[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    ShortestPath { nodes, distance }
}
