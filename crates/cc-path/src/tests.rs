//! Unit tests for cc-path.
//!
//! All tests use hand-built arc lists.

#[cfg(test)]
mod helpers {
    use cc_core::NodeId;
    use crate::AdjacencyList;

    /// Undirected arcs for each `(a, b, w)` triple.
    pub fn undirected(node_count: usize, edges: &[(u32, u32, f64)]) -> AdjacencyList {
        let arcs = edges.iter().flat_map(|&(a, b, w)| {
            [(NodeId(a), NodeId(b), w), (NodeId(b), NodeId(a), w)]
        });
        AdjacencyList::from_arcs(node_count, arcs).unwrap()
    }

    /// Nodes 0..5:
    ///
    /// ```text
    ///   0 ─1─ 1 ─1─ 2
    ///   │           │
    ///   5           1
    ///   │           │
    ///   3 ────1──── 4
    /// ```
    ///
    /// Shortest 0→4 is 0→1→2→4 (3.0) rather than 0→3→4 (6.0).
    pub fn ring() -> AdjacencyList {
        undirected(5, &[(0, 1, 1.0), (1, 2, 1.0), (2, 4, 1.0), (0, 3, 5.0), (3, 4, 1.0)])
    }
}

// ── Adjacency list ────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use cc_core::NodeId;
    use crate::{AdjacencyList, PathError};

    #[test]
    fn isolated_nodes_have_entries() {
        let adj = AdjacencyList::from_arcs(3, [(NodeId(0), NodeId(1), 2.0)]).unwrap();
        assert_eq!(adj.node_count(), 3);
        assert_eq!(adj.arc_count(), 1);
        assert!(adj.contains(NodeId(2)));
        assert!(!adj.is_connected(NodeId(2)));
        assert_eq!(adj.neighbors(NodeId(2)), Some(&[][..]));
        assert!(adj.neighbors(NodeId(3)).is_none());
    }

    #[test]
    fn dangling_arc_rejected() {
        let err = AdjacencyList::from_arcs(2, [(NodeId(0), NodeId(5), 1.0)]).unwrap_err();
        assert_eq!(err, PathError::NodeNotInGraph(NodeId(5)));
        let err = AdjacencyList::from_arcs(2, [(NodeId(9), NodeId(1), 1.0)]).unwrap_err();
        assert_eq!(err, PathError::NodeNotInGraph(NodeId(9)));
    }

    #[test]
    fn negative_weight_rejected() {
        let err = AdjacencyList::from_arcs(2, [(NodeId(0), NodeId(1), -1.0)]).unwrap_err();
        assert!(matches!(err, PathError::InvalidWeight { .. }));
        assert!(AdjacencyList::from_arcs(2, [(NodeId(0), NodeId(1), f64::NAN)]).is_err());
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod solver {
    use cc_core::NodeId;
    use crate::{PathError, dijkstra};

    #[test]
    fn same_node_is_trivial() {
        let adj = super::helpers::ring();
        for i in 0..5 {
            let p = dijkstra(&adj, NodeId(i), NodeId(i)).unwrap().unwrap();
            assert!(p.is_trivial());
            assert_eq!(p.nodes, vec![NodeId(i)]);
            assert_eq!(p.distance, 0.0);
        }
    }

    #[test]
    fn isolated_node_to_itself() {
        let adj = super::helpers::undirected(2, &[]);
        let p = dijkstra(&adj, NodeId(1), NodeId(1)).unwrap().unwrap();
        assert_eq!(p.nodes, vec![NodeId(1)]);
    }

    #[test]
    fn shortest_path_correct() {
        let adj = super::helpers::ring();
        let p = dijkstra(&adj, NodeId(0), NodeId(4)).unwrap().unwrap();
        assert_eq!(p.nodes, vec![NodeId(0), NodeId(1), NodeId(2), NodeId(4)]);
        assert_eq!(p.distance, 3.0);
    }

    #[test]
    fn path_is_reversible() {
        let adj = super::helpers::ring();
        let fwd = dijkstra(&adj, NodeId(0), NodeId(4)).unwrap().unwrap();
        let back = dijkstra(&adj, NodeId(4), NodeId(0)).unwrap().unwrap();
        let mut rev = back.nodes.clone();
        rev.reverse();
        assert_eq!(fwd.nodes, rev);
        assert_eq!(fwd.distance, back.distance);
    }

    #[test]
    fn disconnected_returns_none() {
        let adj = super::helpers::undirected(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
        assert_eq!(dijkstra(&adj, NodeId(0), NodeId(3)).unwrap(), None);
    }

    #[test]
    fn missing_node_is_an_error() {
        let adj = super::helpers::ring();
        assert_eq!(
            dijkstra(&adj, NodeId(0), NodeId(99)),
            Err(PathError::NodeNotInGraph(NodeId(99)))
        );
        assert_eq!(
            dijkstra(&adj, NodeId(42), NodeId(0)),
            Err(PathError::NodeNotInGraph(NodeId(42)))
        );
    }

    #[test]
    fn one_way_arc_blocks_return() {
        use crate::AdjacencyList;
        let adj = AdjacencyList::from_arcs(2, [(NodeId(0), NodeId(1), 1.0)]).unwrap();
        assert!(dijkstra(&adj, NodeId(0), NodeId(1)).unwrap().is_some());
        assert!(dijkstra(&adj, NodeId(1), NodeId(0)).unwrap().is_none());
    }

    #[test]
    fn zero_weight_arcs() {
        // Coincident duplicate nodes (e.g. a corridor crossing itself).
        let adj = super::helpers::undirected(3, &[(0, 1, 0.0), (1, 2, 2.0)]);
        let p = dijkstra(&adj, NodeId(0), NodeId(2)).unwrap().unwrap();
        assert_eq!(p.distance, 2.0);
        assert_eq!(p.nodes.len(), 3);
    }

    #[test]
    fn equal_cost_ties_are_reproducible() {
        // Two equal routes 0→1→3 and 0→2→3.
        let adj = super::helpers::undirected(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)]);
        let a = dijkstra(&adj, NodeId(0), NodeId(3)).unwrap().unwrap();
        let b = dijkstra(&adj, NodeId(0), NodeId(3)).unwrap().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.distance, 2.0);
        // Node 1 was pushed first, so it is settled first and wins the tie.
        assert_eq!(a.nodes, vec![NodeId(0), NodeId(1), NodeId(3)]);
    }
}
