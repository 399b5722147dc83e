//! Planar coordinate types and distance.
//!
//! Coordinates are raw GeoJSON positions, `x = longitude` and `y = latitude`
//! for outdoor data and floorplan units for indoor data.  Distances are plain
//! Euclidean distances on those numbers.  This is not geodesic-corrected: at
//! campus scale (a few hundred metres) the east–west stretch of a degree is
//! constant enough that shortest-path *ordering* is preserved, but the
//! reported `total_distance` is in coordinate units, not metres.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Coord ─────────────────────────────────────────────────────────────────────

/// A planar `[x, y]` position (GeoJSON axis order: lng, lat).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Validate a raw GeoJSON position.  Extra components (altitude) are
    /// ignored.
    pub fn from_position(pos: &[f64]) -> CoreResult<Self> {
        match pos {
            [x, y, ..] => {
                let c = Coord::new(*x, *y);
                if c.is_finite() {
                    Ok(c)
                } else {
                    Err(CoreError::NonFinite { x: *x, y: *y })
                }
            }
            _ => Err(CoreError::ShortPosition(pos.len())),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.  See [`planar_distance`].
    #[inline]
    pub fn distance(self, other: Coord) -> f64 {
        planar_distance(self, other)
    }

    /// `true` if both axes differ from `other` by strictly less than `tol`.
    #[inline]
    pub fn within_box(self, other: Coord, tol: f64) -> bool {
        (self.x - other.x).abs() < tol && (self.y - other.y).abs() < tol
    }

    /// Reorder into `[lat, lng]` for map display.
    #[inline]
    pub fn to_lat_lng(self) -> LatLng {
        LatLng { lat: self.y, lng: self.x }
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Coord::new(x, y)
    }
}

impl From<Coord> for [f64; 2] {
    fn from(c: Coord) -> Self {
        [c.x, c.y]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.x, self.y)
    }
}

/// Euclidean distance between two raw coordinate pairs.
#[inline]
pub fn planar_distance(a: Coord, b: Coord) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

// ── LatLng ────────────────────────────────────────────────────────────────────

/// A `[lat, lng]` pair, the order map widgets expect.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// Axis-aligned bounding box of a set of coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Coord,
    pub max: Coord,
}

impl BoundingBox {
    /// Bounding box of `coords`, or `None` if the slice is empty.
    pub fn of(coords: &[Coord]) -> Option<Self> {
        let (first, rest) = coords.split_first()?;
        let mut bb = BoundingBox { min: *first, max: *first };
        for c in rest {
            bb.min.x = bb.min.x.min(c.x);
            bb.min.y = bb.min.y.min(c.y);
            bb.max.x = bb.max.x.max(c.x);
            bb.max.y = bb.max.y.max(c.y);
        }
        Some(bb)
    }

    #[inline]
    pub fn center(&self) -> Coord {
        Coord::new((self.min.x + self.max.x) / 2.0, (self.min.y + self.max.y) / 2.0)
    }
}
