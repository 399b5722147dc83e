//! Typed campus features.
//!
//! A [`Feature`] pairs a closed [`Geometry`] variant with a [`FeatureRole`]
//! carrying the few properties the engine actually reads.  Raw GeoJSON is
//! validated into these types once, at ingestion (`cc-geojson`); nothing
//! downstream inspects property bags.

use crate::geo::{BoundingBox, Coord, LatLng};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// The geometry kinds the engine understands.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "coordinates"))]
pub enum Geometry {
    Point(Coord),
    LineString(Vec<Coord>),
    /// Rings; the first is the exterior, the rest are holes.
    Polygon(Vec<Vec<Coord>>),
    MultiPolygon(Vec<Vec<Vec<Coord>>>),
    MultiLineString(Vec<Vec<Coord>>),
}

impl Geometry {
    /// Short name of the geometry kind, as it appears in GeoJSON.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::MultiLineString(_) => "MultiLineString",
        }
    }

    pub fn as_point(&self) -> Option<Coord> {
        match self {
            Geometry::Point(c) => Some(*c),
            _ => None,
        }
    }

    /// Display anchor of the geometry in `[lat, lng]` order.
    ///
    /// Polygons use the midpoint of the bounding box of the exterior ring of
    /// the *first* polygon only; holes and further polygons are ignored.
    /// This is an approximation, not an area centroid, and camera placement
    /// depends on it staying that way.
    pub fn center(&self) -> Option<LatLng> {
        match self {
            Geometry::Point(c) => Some(c.to_lat_lng()),
            Geometry::Polygon(rings) => first_ring_center(rings),
            Geometry::MultiPolygon(polys) => first_ring_center(polys.first()?),
            Geometry::LineString(_) | Geometry::MultiLineString(_) => None,
        }
    }
}

fn first_ring_center(rings: &[Vec<Coord>]) -> Option<LatLng> {
    let ring = rings.first()?;
    BoundingBox::of(ring).map(|bb| bb.center().to_lat_lng())
}

// ── FeatureRole ───────────────────────────────────────────────────────────────

/// What a feature represents on the campus.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeatureRole {
    /// Indoor walkable segment (`feature_type: corridor`).
    Corridor { id: Option<String> },
    /// Indoor opening (`feature_type: door`), snapped onto the corridor graph.
    Door { id: Option<String> },
    Building {
        building_id: String,
        name: Option<String>,
        levels: Option<u32>,
    },
    /// Outdoor walkable segment.  `status: Some(false)` marks it closed.
    Footpath { status: Option<bool> },
    Entrance {
        id: String,
        name: Option<String>,
        /// Set from explicit markers (`type: elevator`, `is_elevator`,
        /// `elevator: true`) at ingestion.
        elevator: bool,
    },
    BusStop { id: String, name: Option<String> },
    /// Anything else found on a layer (rooms, labels); carried but unused.
    Other,
}

// ── Feature ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    pub role: FeatureRole,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(role: FeatureRole, geometry: Geometry) -> Self {
        Self { role, geometry }
    }

    /// Identifier carried by the role, if any.
    pub fn id(&self) -> Option<&str> {
        match &self.role {
            FeatureRole::Corridor { id } | FeatureRole::Door { id } => id.as_deref(),
            FeatureRole::Building { building_id, .. } => Some(building_id),
            FeatureRole::Entrance { id, .. } | FeatureRole::BusStop { id, .. } => Some(id),
            FeatureRole::Footpath { .. } | FeatureRole::Other => None,
        }
    }

    pub fn is_corridor(&self) -> bool {
        matches!(self.role, FeatureRole::Corridor { .. })
    }

    pub fn is_door(&self) -> bool {
        matches!(self.role, FeatureRole::Door { .. })
    }

    /// `false` only for footpaths explicitly marked `status: false`.
    pub fn is_open(&self) -> bool {
        !matches!(self.role, FeatureRole::Footpath { status: Some(false) })
    }

    /// Elevator entrances are not usable outdoor egress points.
    ///
    /// True for an explicit marker or a name containing "elevator" in any
    /// case.  Non-entrance features are never elevators.
    pub fn is_elevator(&self) -> bool {
        match &self.role {
            FeatureRole::Entrance { elevator, name, .. } => {
                *elevator
                    || name
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains("elevator"))
            }
            _ => false,
        }
    }
}

/// Map-camera anchor for `feature` in `[lat, lng]` order.
///
/// `None` means "do not move the camera", not an error.
pub fn feature_center(feature: &Feature) -> Option<LatLng> {
    feature.geometry.center()
}
