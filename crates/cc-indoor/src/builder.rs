//! Floor graph construction from corridor and door features.
//!
//! # Passes
//!
//! 1. Every corridor part becomes a chain of nodes, one per vertex, with an
//!    undirected edge between consecutive vertices.
//! 2. Every door becomes a node at its raw coordinate.
//! 3. Each door is connected to the nearest *other* node (corridor vertex or
//!    door) if that node lies within `max_connect_dist`.  The edge keeps the
//!    pre-snap distance; the door's coordinate is then moved onto the node if
//!    the distance is within `snap_threshold`.
//!
//! The nearest-node search is a linear scan, O(doors × nodes).  Floorplans
//! have at most a few thousand nodes; a grid or k-d tree would be needed
//! beyond that.

use cc_core::{Coord, Feature, FeatureRole, Geometry, IndoorConfig, NodeId, planar_distance};

use crate::graph::{Graph, GraphBuilder, NodeKind};
use crate::IndoorResult;

// ── BuildReport ───────────────────────────────────────────────────────────────

/// What happened during a floor build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuildReport {
    pub corridor_nodes: usize,
    pub door_nodes: usize,
    pub connected_doors: usize,
    pub snapped_doors: usize,
    /// Doors with no node within `max_connect_dist`.  They stay in the graph
    /// as isolated nodes.
    pub isolated_doors: Vec<NodeId>,
    /// Vertices dropped for non-finite coordinates.
    pub skipped_vertices: usize,
    /// Extra corridor links added by `corridor_link_radius`.
    pub proximity_links: usize,
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Build the walkable graph of one floor.
///
/// Only corridor and door features are read; everything else on the floor
/// layer (rooms, labels) is ignored.  Malformed vertices are skipped and
/// break the corridor chain at that point rather than bridging the gap.
///
/// # Errors
///
/// - [`IndoorError::Config`](crate::IndoorError::Config) if `config` fails
///   validation.
/// - [`IndoorError::DanglingEdge`](crate::IndoorError::DanglingEdge), which
///   would indicate a bug in this module.
pub fn build_indoor_graph(features: &[Feature], config: &IndoorConfig) -> IndoorResult<Graph> {
    config.validate()?;
    let mut b = GraphBuilder::new();

    let mut parts = corridor_parts(features);
    if let Some(tol) = config.endpoint_merge_tolerance {
        let mut lines: Vec<Vec<Coord>> = parts.iter().map(|(_, _, l)| l.clone()).collect();
        merge_loose_endpoints(&mut lines, tol);
        for (part, merged) in parts.iter_mut().zip(lines) {
            part.2 = merged;
        }
    }

    // ── Corridors ─────────────────────────────────────────────────────────
    let mut corridor_ids = Vec::new();
    for (feature, label, line) in &parts {
        let mut prev: Option<NodeId> = None;
        for &coord in line {
            if !coord.is_finite() {
                b.report_mut().skipped_vertices += 1;
                prev = None;
                continue;
            }
            let id = b.add_node(coord, NodeKind::CorridorVertex, label.clone(), *feature);
            corridor_ids.push(id);
            if let Some(p) = prev {
                b.connect(p, id)?;
            }
            prev = Some(id);
        }
    }
    b.report_mut().corridor_nodes = corridor_ids.len();

    if let Some(radius) = config.corridor_link_radius {
        link_nearby_corridors(&mut b, &corridor_ids, radius)?;
    }

    // ── Doors ─────────────────────────────────────────────────────────────
    let mut doors = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        let FeatureRole::Door { id } = &feature.role else { continue };
        let Some(coord) = feature.geometry.as_point() else {
            tracing::debug!(index, kind = feature.geometry.kind(), "door without point geometry");
            continue;
        };
        if !coord.is_finite() {
            b.report_mut().skipped_vertices += 1;
            continue;
        }
        doors.push(b.add_node(coord, NodeKind::Door { snapped: false }, id.clone(), index));
    }
    b.report_mut().door_nodes = doors.len();

    for door in doors {
        connect_door(&mut b, door, config)?;
    }

    let graph = b.build();
    let r = graph.report();
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        connected = r.connected_doors,
        snapped = r.snapped_doors,
        isolated = r.isolated_doors.len(),
        "built floor graph"
    );
    Ok(graph)
}

/// Close small gaps between corridor polylines.
///
/// Endpoints (first and last vertex of every line) are grouped greedily: each
/// ungrouped endpoint collects every later ungrouped endpoint within `tol` of
/// it.  Every endpoint in a group is replaced by the group's mean position.
/// Interior vertices are never moved.
pub fn merge_loose_endpoints(lines: &mut [Vec<Coord>], tol: f64) {
    // (line index, vertex index, position)
    let mut ends: Vec<(usize, usize, Coord)> = Vec::new();
    for (li, line) in lines.iter().enumerate() {
        if let (Some(first), Some(last)) = (line.first(), line.last()) {
            ends.push((li, 0, *first));
            ends.push((li, line.len() - 1, *last));
        }
    }

    let mut used = vec![false; ends.len()];
    for i in 0..ends.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let mut group = vec![i];
        for j in (i + 1)..ends.len() {
            if !used[j] && planar_distance(ends[i].2, ends[j].2) <= tol {
                used[j] = true;
                group.push(j);
            }
        }

        let n = group.len() as f64;
        let sum = group.iter().fold(Coord::default(), |acc, &g| {
            Coord::new(acc.x + ends[g].2.x, acc.y + ends[g].2.y)
        });
        let mean = Coord::new(sum.x / n, sum.y / n);
        for &g in &group {
            let (li, vi, _) = ends[g];
            lines[li][vi] = mean;
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `(feature index, label, vertices)` for every corridor line part.
fn corridor_parts(features: &[Feature]) -> Vec<(usize, Option<String>, Vec<Coord>)> {
    let mut parts = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        let FeatureRole::Corridor { id } = &feature.role else { continue };
        match &feature.geometry {
            Geometry::MultiLineString(lines) => {
                parts.extend(lines.iter().map(|l| (index, id.clone(), l.clone())));
            }
            Geometry::LineString(line) => parts.push((index, id.clone(), line.clone())),
            other => {
                tracing::debug!(index, kind = other.kind(), "corridor without line geometry");
            }
        }
    }
    parts
}

fn link_nearby_corridors(b: &mut GraphBuilder, ids: &[NodeId], radius: f64) -> IndoorResult<()> {
    let mut pairs = Vec::new();
    for (i, &a) in ids.iter().enumerate() {
        for &c in &ids[i + 1..] {
            let (Some(na), Some(nc)) = (b.node(a), b.node(c)) else { continue };
            if planar_distance(na.coord, nc.coord) <= radius {
                pairs.push((a, c));
            }
        }
    }
    for (a, c) in pairs {
        b.connect(a, c)?;
        b.report_mut().proximity_links += 1;
    }
    Ok(())
}

fn connect_door(b: &mut GraphBuilder, door: NodeId, config: &IndoorConfig) -> IndoorResult<()> {
    let Some(origin) = b.node(door).map(|n| n.coord) else { return Ok(()) };

    // First strictly-smaller distance wins, so ties go to the lowest id.
    let mut nearest: Option<(NodeId, Coord, f64)> = None;
    for node in b.nodes() {
        if node.id == door {
            continue;
        }
        let d = planar_distance(origin, node.coord);
        if nearest.is_none_or(|(_, _, best)| d < best) {
            nearest = Some((node.id, node.coord, d));
        }
    }

    match nearest {
        Some((target, target_coord, dist)) if dist <= config.max_connect_dist => {
            b.connect_weighted(door, target, dist)?;
            b.report_mut().connected_doors += 1;
            if dist <= config.snap_threshold {
                if let Some(n) = b.node_mut(door) {
                    n.coord = target_coord;
                    n.kind = NodeKind::Door { snapped: true };
                }
                b.report_mut().snapped_doors += 1;
            }
        }
        other => {
            let label = b.node(door).and_then(|n| n.label.clone());
            tracing::warn!(
                %door,
                label = label.as_deref().unwrap_or("-"),
                nearest = other.map(|(_, _, d)| d),
                max_connect_dist = config.max_connect_dist,
                "door has no node within reach; left unconnected"
            );
            b.report_mut().isolated_doors.push(door);
        }
    }
    Ok(())
}
