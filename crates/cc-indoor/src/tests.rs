//! Unit tests for cc-indoor.
//!
//! Floors are hand-built feature lists in floorplan (pixel-like) units.

#[cfg(test)]
mod helpers {
    use cc_core::{Coord, Feature, FeatureRole, Geometry};

    pub fn corridor(id: &str, parts: &[&[(f64, f64)]]) -> Feature {
        Feature::new(
            FeatureRole::Corridor { id: Some(id.to_string()) },
            Geometry::MultiLineString(
                parts
                    .iter()
                    .map(|p| p.iter().map(|&(x, y)| Coord::new(x, y)).collect())
                    .collect(),
            ),
        )
    }

    pub fn door(id: &str, x: f64, y: f64) -> Feature {
        Feature::new(
            FeatureRole::Door { id: Some(id.to_string()) },
            Geometry::Point(Coord::new(x, y)),
        )
    }

    /// An L-shaped corridor `(0,0) → (100,0) → (100,100)` with three doors:
    ///
    /// - `p_near`: 3 units off the corridor start → connected and snapped
    /// - `p_mid`: 20 units off the corner → connected, not snapped
    /// - `p_far`: far away → isolated with `max_connect_dist = 1000`
    pub fn l_floor() -> Vec<Feature> {
        vec![
            corridor("c_1", &[&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]]),
            door("p_near", 0.0, 3.0),
            door("p_mid", 120.0, 0.0),
            door("p_far", 5_000.0, 5_000.0),
        ]
    }
}

// ── Graph builder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use cc_core::{Coord, NodeId};
    use crate::{GraphBuilder, IndoorError, NodeKind};

    #[test]
    fn empty_build() {
        let g = GraphBuilder::new().build();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.to_adjacency().unwrap().node_count(), 0);
    }

    #[test]
    fn ids_are_sequential_per_builder() {
        let mut a = GraphBuilder::new();
        let mut b = GraphBuilder::new();
        assert_eq!(a.add_node(Coord::default(), NodeKind::CorridorVertex, None, 0), NodeId(0));
        assert_eq!(a.add_node(Coord::default(), NodeKind::CorridorVertex, None, 0), NodeId(1));
        // A fresh builder starts again at zero.
        assert_eq!(b.add_node(Coord::default(), NodeKind::CorridorVertex, None, 0), NodeId(0));
    }

    #[test]
    fn dangling_edge_is_a_defect() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Coord::default(), NodeKind::CorridorVertex, None, 0);
        let err = b.connect(a, NodeId(7)).unwrap_err();
        assert_eq!(err, IndoorError::DanglingEdge { u: a, v: NodeId(7), node_count: 1 });
        assert_eq!(b.edge_count(), 0);
    }

    #[test]
    fn resolve_by_label_or_index() {
        let mut b = GraphBuilder::new();
        b.add_node(Coord::default(), NodeKind::CorridorVertex, None, 0);
        let d = b.add_node(Coord::default(), NodeKind::Door { snapped: false }, Some("p_1".into()), 1);
        let g = b.build();
        assert_eq!(g.resolve("p_1"), Some(d));
        assert_eq!(g.resolve("n0"), Some(NodeId(0)));
        assert_eq!(g.resolve("n9"), None);
        assert_eq!(g.resolve("p_2"), None);
        assert_eq!(g.resolve(""), None);
    }
}

// ── Corridors ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod corridors {
    use cc_core::{Coord, IndoorConfig, planar_distance};
    use crate::build_indoor_graph;

    #[test]
    fn consecutive_vertices_get_two_equal_edges() {
        let floor = vec![super::helpers::corridor(
            "c_1",
            &[&[(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)], &[(50.0, 50.0), (60.0, 50.0)]],
        )];
        let g = build_indoor_graph(&floor, &IndoorConfig::default()).unwrap();
        assert_eq!(g.node_count(), 5);
        // (3 - 1) + (2 - 1) connections, two directed edges each.
        assert_eq!(g.edge_count(), 6);

        for pair in g.edges().chunks(2) {
            let (fwd, back) = (pair[0], pair[1]);
            assert_eq!((fwd.u, fwd.v), (back.v, back.u));
            assert_eq!(fwd.weight, back.weight);
            let expected = planar_distance(
                g.node(fwd.u).unwrap().coord,
                g.node(fwd.v).unwrap().coord,
            );
            assert_eq!(fwd.weight, expected);
        }
        assert_eq!(g.edges()[0].weight, 5.0);
    }

    #[test]
    fn parts_are_not_joined() {
        let floor = vec![super::helpers::corridor(
            "c_1",
            &[&[(0.0, 0.0), (1.0, 0.0)], &[(2.0, 0.0), (3.0, 0.0)]],
        )];
        let g = build_indoor_graph(&floor, &IndoorConfig::default()).unwrap();
        let adj = g.to_adjacency().unwrap();
        let (a, d) = (g.resolve("n0").unwrap(), g.resolve("n3").unwrap());
        assert!(cc_path::dijkstra(&adj, a, d).unwrap().is_none());
    }

    #[test]
    fn self_crossing_keeps_duplicate_nodes() {
        let floor = vec![super::helpers::corridor(
            "c_loop",
            &[&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]],
        )];
        let g = build_indoor_graph(&floor, &IndoorConfig::default()).unwrap();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.nodes()[0].coord, g.nodes()[3].coord);
    }

    #[test]
    fn non_finite_vertex_breaks_chain() {
        let floor = vec![super::helpers::corridor(
            "c_bad",
            &[&[(0.0, 0.0), (f64::NAN, 1.0), (2.0, 0.0), (3.0, 0.0)]],
        )];
        let g = build_indoor_graph(&floor, &IndoorConfig::default()).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.report().skipped_vertices, 1);
        // Only (2,0)-(3,0) is connected.
        assert_eq!(g.edge_count(), 2);
        assert!(g.is_isolated(g.resolve("n0").unwrap()));
        assert_eq!(g.nodes()[1].coord, Coord::new(2.0, 0.0));
    }

    #[test]
    fn endpoint_merge_closes_gap() {
        let floor = vec![
            super::helpers::corridor("c_a", &[&[(0.0, 0.0), (10.0, 0.0)]]),
            super::helpers::corridor("c_b", &[&[(12.0, 0.0), (20.0, 0.0)]]),
        ];
        let config = IndoorConfig { endpoint_merge_tolerance: Some(3.0), ..Default::default() };
        let g = build_indoor_graph(&floor, &config).unwrap();
        assert_eq!(g.nodes()[1].coord, Coord::new(11.0, 0.0));
        assert_eq!(g.nodes()[2].coord, Coord::new(11.0, 0.0));
    }

    #[test]
    fn proximity_links_join_parts() {
        let floor = vec![
            super::helpers::corridor("c_a", &[&[(0.0, 0.0), (10.0, 0.0)]]),
            super::helpers::corridor("c_b", &[&[(12.0, 0.0), (20.0, 0.0)]]),
        ];
        let config = IndoorConfig { corridor_link_radius: Some(2.5), ..Default::default() };
        let g = build_indoor_graph(&floor, &config).unwrap();
        assert_eq!(g.report().proximity_links, 1);
        let adj = g.to_adjacency().unwrap();
        let p = cc_path::dijkstra(&adj, g.resolve("n0").unwrap(), g.resolve("n3").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(p.distance, 20.0);
    }
}

#[cfg(test)]
mod merge {
    use cc_core::Coord;
    use crate::merge_loose_endpoints;

    #[test]
    fn interior_vertices_untouched() {
        let mut lines = vec![
            vec![Coord::new(0.0, 0.0), Coord::new(5.0, 5.0), Coord::new(10.0, 0.0)],
            vec![Coord::new(10.0, 2.0), Coord::new(20.0, 0.0)],
        ];
        merge_loose_endpoints(&mut lines, 2.0);
        assert_eq!(lines[0][1], Coord::new(5.0, 5.0));
        assert_eq!(lines[0][2], Coord::new(10.0, 1.0));
        assert_eq!(lines[1][0], Coord::new(10.0, 1.0));
        assert_eq!(lines[1][1], Coord::new(20.0, 0.0));
    }

    #[test]
    fn distant_endpoints_stay_put() {
        let mut lines = vec![vec![Coord::new(0.0, 0.0), Coord::new(100.0, 0.0)]];
        merge_loose_endpoints(&mut lines, 1.0);
        assert_eq!(lines[0], vec![Coord::new(0.0, 0.0), Coord::new(100.0, 0.0)]);
    }
}

// ── Doors ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod doors {
    use cc_core::{Coord, IndoorConfig};
    use crate::{NodeKind, build_indoor_graph};

    #[test]
    fn near_door_snaps_onto_corridor_vertex() {
        let g = build_indoor_graph(&super::helpers::l_floor(), &IndoorConfig::default()).unwrap();
        let door = g.node(g.resolve("p_near").unwrap()).unwrap();
        assert_eq!(door.coord, Coord::new(0.0, 0.0));
        assert_eq!(door.kind, NodeKind::Door { snapped: true });
    }

    #[test]
    fn snapped_edge_keeps_pre_snap_weight() {
        let g = build_indoor_graph(&super::helpers::l_floor(), &IndoorConfig::default()).unwrap();
        let door = g.resolve("p_near").unwrap();
        let e = g.edges().iter().find(|e| e.u == door).unwrap();
        assert_eq!(e.weight, 3.0);
        assert_eq!(e.v, g.resolve("n0").unwrap());
    }

    #[test]
    fn mid_door_connected_but_not_snapped() {
        let g = build_indoor_graph(&super::helpers::l_floor(), &IndoorConfig::default()).unwrap();
        let id = g.resolve("p_mid").unwrap();
        let door = g.node(id).unwrap();
        assert_eq!(door.coord, Coord::new(120.0, 0.0));
        assert_eq!(door.kind, NodeKind::Door { snapped: false });
        let e = g.edges().iter().find(|e| e.u == id).unwrap();
        assert_eq!(e.weight, 20.0);
    }

    #[test]
    fn far_door_left_isolated() {
        let g = build_indoor_graph(&super::helpers::l_floor(), &IndoorConfig::default()).unwrap();
        let id = g.resolve("p_far").unwrap();
        assert!(g.node(id).is_some());
        assert!(g.is_isolated(id));
        assert_eq!(g.report().isolated_doors, vec![id]);
        assert_eq!(g.report().connected_doors, 2);
        assert_eq!(g.report().snapped_doors, 1);
    }

    #[test]
    fn door_can_attach_to_another_door() {
        // No corridors: each door's nearest node is the other door.
        let floor = vec![
            super::helpers::door("p_a", 0.0, 0.0),
            super::helpers::door("p_b", 10.0, 0.0),
        ];
        let g = build_indoor_graph(&floor, &IndoorConfig::default()).unwrap();
        assert_eq!(g.report().connected_doors, 2);
        assert_eq!(g.report().snapped_doors, 0);
        // One connection per door, parallel.
        assert_eq!(g.edge_count(), 4);
        let b = g.node(g.resolve("p_b").unwrap()).unwrap();
        assert_eq!(b.coord, Coord::new(10.0, 0.0));
    }

    #[test]
    fn lone_door_has_no_candidate() {
        let floor = vec![super::helpers::door("p_a", 0.0, 0.0)];
        let g = build_indoor_graph(&floor, &IndoorConfig::default()).unwrap();
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.report().isolated_doors.len(), 1);
    }

    #[test]
    fn door_routes_through_corridor() {
        let g = build_indoor_graph(&super::helpers::l_floor(), &IndoorConfig::default()).unwrap();
        let adj = g.to_adjacency().unwrap();
        let from = g.resolve("p_near").unwrap();
        let to = g.resolve("p_mid").unwrap();
        let p = cc_path::dijkstra(&adj, from, to).unwrap().unwrap();
        // 3 (door edge) + 100 (corridor) + 20 (door edge)
        assert_eq!(p.distance, 123.0);
        let coords = g.coords_of(&p.nodes);
        assert_eq!(coords.first(), Some(&Coord::new(0.0, 0.0)));
        assert_eq!(coords.last(), Some(&Coord::new(120.0, 0.0)));
    }

    #[test]
    fn isolated_door_unreachable() {
        let g = build_indoor_graph(&super::helpers::l_floor(), &IndoorConfig::default()).unwrap();
        let adj = g.to_adjacency().unwrap();
        let p = cc_path::dijkstra(&adj, g.resolve("p_near").unwrap(), g.resolve("p_far").unwrap());
        assert_eq!(p, Ok(None));
    }
}

#[cfg(test)]
mod config {
    use cc_core::{CoreError, IndoorConfig};
    use crate::{IndoorError, build_indoor_graph};

    #[test]
    fn invalid_config_rejected_before_build() {
        let config = IndoorConfig { max_connect_dist: -1.0, ..Default::default() };
        let err = build_indoor_graph(&super::helpers::l_floor(), &config).unwrap_err();
        assert!(matches!(
            err,
            IndoorError::Config(CoreError::InvalidConfig { field: "max_connect_dist", .. })
        ));
    }
}
