//! Unit tests for cc-route.

#[cfg(test)]
mod helpers {
    use cc_core::{BuildingMetadata, Coord, Feature, FeatureRole, Geometry, MetadataMap};

    use crate::{RoutePlanner, RoutePlannerBuilder};

    fn point(role: FeatureRole, x: f64, y: f64) -> Feature {
        Feature::new(role, Geometry::Point(Coord::new(x, y)))
    }

    pub fn door(id: &str, x: f64, y: f64) -> Feature {
        point(FeatureRole::Door { id: Some(id.into()) }, x, y)
    }

    pub fn corridor(id: &str, pts: &[(f64, f64)]) -> Feature {
        Feature::new(
            FeatureRole::Corridor { id: Some(id.into()) },
            Geometry::MultiLineString(vec![pts.iter().map(|&(x, y)| Coord::new(x, y)).collect()]),
        )
    }

    /// Straight corridor `(0,0) → (100,0)`; `p_1` and `p_2` snap onto its
    /// ends, `p_far` is isolated.
    pub fn floor() -> Vec<Feature> {
        vec![
            corridor("c_1", &[(0.0, 0.0), (100.0, 0.0)]),
            door("p_1", 0.0, 3.0),
            door("p_2", 100.0, 4.0),
            door("p_far", 5_000.0, 5_000.0),
        ]
    }

    /// Two buildings whose entrances are joined by one 50-unit footpath.
    pub fn planner() -> RoutePlanner {
        let mut metadata = MetadataMap::new();
        for (b, e) in [("bldg_1", "e1"), ("bldg_2", "e2")] {
            metadata.insert(
                b.to_string(),
                BuildingMetadata {
                    building_id: b.into(),
                    entrances: vec![e.into()],
                    ..Default::default()
                },
            );
        }
        let footprint = vec![vec![
            Coord::new(0.0, 0.0),
            Coord::new(2.0, 0.0),
            Coord::new(2.0, 4.0),
            Coord::new(0.0, 4.0),
            Coord::new(0.0, 0.0),
        ]];
        RoutePlannerBuilder::new()
            .buildings(vec![Feature::new(
                FeatureRole::Building { building_id: "bldg_1".into(), name: None, levels: None },
                Geometry::Polygon(footprint),
            )])
            .footpaths(vec![Feature::new(
                FeatureRole::Footpath { status: None },
                Geometry::LineString(vec![Coord::new(0.0, 0.0), Coord::new(30.0, 40.0)]),
            )])
            .entrances(vec![
                point(FeatureRole::Entrance { id: "e1".into(), name: None, elevator: false }, 0.0, 0.0),
                point(FeatureRole::Entrance { id: "e2".into(), name: None, elevator: false }, 30.0, 40.0),
            ])
            .bus_stops(vec![point(FeatureRole::BusStop { id: "bus_1".into(), name: None }, 30.0, 40.0)])
            .metadata(metadata)
            .build()
            .unwrap()
    }
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use cc_core::{Coord, RouteKind};
    use crate::RouteError;
    use super::helpers::{floor, planner};

    #[test]
    fn outdoor_between_buildings() {
        let p = planner();
        let route = p.route("bldg_1", "bldg_2").unwrap();
        assert_eq!(route.kind, RouteKind::Outdoor);
        assert_eq!(route.route_coords, vec![Coord::new(0.0, 0.0), Coord::new(30.0, 40.0)]);
        assert_eq!(route.total_distance, 50.0);
    }

    #[test]
    fn outdoor_uses_prebuilt_network_only() {
        let p = planner();
        assert_eq!(p.network().node_count(), 2);
        let route = p.route("bldg_2", "bldg_1").unwrap();
        assert_eq!(route.total_distance, 50.0);
        assert_eq!(route.start_point, Coord::new(30.0, 40.0));
    }

    #[test]
    fn outdoor_to_bus_stop() {
        let route = planner().route("bldg_1", "bus_1").unwrap();
        assert_eq!(route.end_point, Coord::new(30.0, 40.0));
        assert_eq!(route.total_distance, 50.0);
    }

    #[test]
    fn indoor_when_both_ids_on_floor() {
        let mut p = planner();
        p.load_floor(&floor()).unwrap();
        let route = p.route("p_1", "p_2").unwrap();
        assert_eq!(route.kind, RouteKind::Indoor);
        assert_eq!(route.total_distance, 107.0);
        assert_eq!(route.start_point, Coord::new(0.0, 0.0));
        assert_eq!(route.end_point, Coord::new(100.0, 0.0));
        assert_eq!(route.route_coords.len(), 4);
        assert!(route.passed_points.is_empty());
    }

    #[test]
    fn generated_node_names_resolve() {
        let mut p = planner();
        p.load_floor(&floor()).unwrap();
        let route = p.route("n0", "n1").unwrap();
        assert_eq!(route.kind, RouteKind::Indoor);
        assert_eq!(route.total_distance, 100.0);
    }

    #[test]
    fn mixed_ids_fall_through_to_outdoor() {
        let mut p = planner();
        p.load_floor(&floor()).unwrap();
        let err = p.route("p_1", "bldg_2").unwrap_err();
        assert!(matches!(err, RouteError::Outdoor(_)));
        assert!(err.is_unroutable());
    }

    #[test]
    fn without_floor_doors_are_unknown() {
        let err = planner().route("p_1", "p_2").unwrap_err();
        assert!(err.is_unroutable());
    }

    #[test]
    fn isolated_door_has_no_route() {
        let mut p = planner();
        p.load_floor(&floor()).unwrap();
        let err = p.route("p_1", "p_far").unwrap_err();
        assert_eq!(err, RouteError::NoIndoorRoute { start: "p_1".into(), end: "p_far".into() });
        assert!(!err.is_unroutable());
    }

    #[test]
    fn blank_ids_rejected() {
        let p = planner();
        assert_eq!(p.route("  ", "bldg_2").unwrap_err(), RouteError::EmptyIdentifier { side: "start" });
        assert_eq!(p.route("bldg_1", "").unwrap_err(), RouteError::EmptyIdentifier { side: "end" });
    }
}

// ── Floors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod floors {
    use std::sync::Arc;

    use cc_core::{IndoorConfig, LatLng, NodeId, RoutingConfig};
    use cc_indoor::IndoorError;
    use cc_outdoor::OutdoorError;
    use cc_path::PathError;
    use crate::{FloorGraph, RouteError, RoutePlannerBuilder};
    use super::helpers::{corridor, floor, planner};

    #[test]
    fn reload_leaves_held_floor_untouched() {
        let mut p = planner();
        let first = p.load_floor(&floor()).unwrap();
        let second = p.load_floor(&[corridor("c_9", &[(0.0, 0.0), (1.0, 0.0)])]).unwrap();
        assert_eq!(first.graph().node_count(), 5);
        assert_eq!(second.graph().node_count(), 2);
        assert!(Arc::ptr_eq(&p.floor().unwrap(), &second));
        assert!(first.resolve("p_1").is_some());
        assert!(second.resolve("p_1").is_none());
    }

    #[test]
    fn builder_loads_initial_floor() {
        let p = RoutePlannerBuilder::new().floor(floor()).build().unwrap();
        let f = p.floor().unwrap();
        assert_eq!(f.graph().report().isolated_doors.len(), 1);
        assert_eq!(f.adjacency().node_count(), 5);
    }

    #[test]
    fn clear_floor_routes_outdoors() {
        let mut p = planner();
        p.load_floor(&floor()).unwrap();
        p.clear_floor();
        assert!(p.floor().is_none());
        assert!(matches!(p.route("p_1", "p_2"), Err(RouteError::Outdoor(_))));
    }

    #[test]
    fn unknown_node_on_floor_graph() {
        let f = FloorGraph::build(&floor(), &IndoorConfig::default()).unwrap();
        let err = f.route("p_1", "p_404").unwrap_err();
        assert_eq!(err, RouteError::Path(PathError::NodeNotInGraph(NodeId::INVALID)));
        assert!(err.is_unroutable());
    }

    #[test]
    fn invalid_config_rejected_at_build() {
        let mut config = RoutingConfig::default();
        config.outdoor.vertex_precision = 0.0;
        let err = RoutePlannerBuilder::new().config(config).build().err().unwrap();
        assert!(matches!(err, RouteError::Outdoor(OutdoorError::Config(_))));

        let mut p = planner();
        p.config.indoor.snap_threshold = -5.0;
        assert!(matches!(p.load_floor(&floor()), Err(RouteError::Indoor(IndoorError::Config(_)))));
    }

    #[test]
    fn building_center_from_footprint() {
        let p = planner();
        assert_eq!(p.building_center("bldg_1"), Some(LatLng { lat: 2.0, lng: 1.0 }));
        assert_eq!(p.building_center("bldg_2"), None);
    }
}
