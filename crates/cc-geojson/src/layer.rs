//! FeatureCollection loader.
//!
//! # Role rules
//!
//! | Layer       | Role                  | Required properties                     |
//! |-------------|-----------------------|-----------------------------------------|
//! | `Buildings` | `Building`            | `building_id`                           |
//! | `Footpaths` | `Footpath`            | none (`status: false` marks closed)     |
//! | `Entrances` | `Entrance`            | `id`                                    |
//! | `BusStops`  | `BusStop`             | `id` (falls back to `name`)             |
//! | `Floor`     | `Corridor`/`Door`/`Other` | `feature_type`, or a `c_`/`p_` id   |
//!
//! Ids may be strings or numbers; numbers are stringified.  A feature missing
//! a required property is skipped.
//!
//! `MultiPoint` geometries are reduced to their first point.
//!
//! # Bad positions
//!
//! A Point with a bad position (fewer than two numbers, or a non-number) is
//! skipped as a whole.  Inside a LineString or MultiLineString the bad
//! position is kept as a [`GAP`] vertex, so the graph builders break the
//! line there instead of joining its neighbours.  Inside a polygon ring it is
//! dropped.  A line or polygon feature is skipped only when no valid vertex
//! is left.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use cc_core::{Coord, CoreError, Feature, FeatureRole, Geometry};

use crate::{GeoJsonError, GeoJsonResult};

type Props = Map<String, Value>;

/// Components are read as raw values so one `null` cannot fail the whole
/// geometry.
type Position = Vec<Value>;

// ── Public types ──────────────────────────────────────────────────────────────

/// Which campus data file a collection came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    Buildings,
    Footpaths,
    Entrances,
    BusStops,
    /// One floor of one building (corridors, doors, rooms).
    Floor,
}

/// Features accepted from one collection, plus how many were dropped.
#[derive(Clone, Debug, Default)]
pub struct LoadedLayer {
    pub features: Vec<Feature>,
    pub skipped: usize,
    /// Malformed positions inside otherwise usable line and polygon
    /// features.
    pub bad_positions: usize,
}

/// Placeholder vertex standing in for a malformed line position.
pub const GAP: Coord = Coord::new(f64::NAN, f64::NAN);

// ── Raw GeoJSON ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Value>,
}

#[derive(Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<Props>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse a FeatureCollection held in memory.
pub fn parse_layer(json: &str, layer: Layer) -> GeoJsonResult<LoadedLayer> {
    let raw: RawCollection = serde_json::from_str(json)?;
    convert(raw, layer)
}

/// Like [`parse_layer`] but accepts any `Read` source.
pub fn read_layer<R: Read>(reader: R, layer: Layer) -> GeoJsonResult<LoadedLayer> {
    let raw: RawCollection = serde_json::from_reader(reader)?;
    convert(raw, layer)
}

/// Load a FeatureCollection file.
pub fn load_layer(path: &Path, layer: Layer) -> GeoJsonResult<LoadedLayer> {
    let file = std::fs::File::open(path)?;
    let loaded = read_layer(std::io::BufReader::new(file), layer)?;
    tracing::debug!(
        path = %path.display(),
        ?layer,
        features = loaded.features.len(),
        skipped = loaded.skipped,
        bad_positions = loaded.bad_positions,
        "loaded layer"
    );
    Ok(loaded)
}

// ── Conversion ────────────────────────────────────────────────────────────────

fn convert(raw: RawCollection, layer: Layer) -> GeoJsonResult<LoadedLayer> {
    if raw.kind != "FeatureCollection" {
        return Err(GeoJsonError::NotACollection(raw.kind));
    }

    let mut out = LoadedLayer::default();
    for (index, value) in raw.features.into_iter().enumerate() {
        match convert_feature(value, layer, &mut out.bad_positions) {
            Ok(Some(feature)) => out.features.push(feature),
            Ok(None) => out.skipped += 1,
            Err(e) => {
                tracing::debug!(index, ?layer, error = %e, "skipping malformed feature");
                out.skipped += 1;
            }
        }
    }
    Ok(out)
}

/// `Ok(None)` for well-formed features the layer has no use for.
fn convert_feature(value: Value, layer: Layer, bad: &mut usize) -> GeoJsonResult<Option<Feature>> {
    let raw: RawFeature = serde_json::from_value(value)?;
    let props = raw.properties.unwrap_or_default();
    let Some(raw_geometry) = raw.geometry else { return Ok(None) };
    let mut bad_here = 0;
    let Some(geometry) = convert_geometry(raw_geometry, &mut bad_here)? else { return Ok(None) };

    let role = match layer {
        Layer::Buildings => {
            let Some(building_id) = string_prop(&props, "building_id") else { return Ok(None) };
            FeatureRole::Building {
                building_id,
                name: string_prop(&props, "name"),
                levels: string_prop(&props, "building:levels").and_then(|l| l.parse().ok()),
            }
        }
        Layer::Footpaths => FeatureRole::Footpath { status: props.get("status").and_then(Value::as_bool) },
        Layer::Entrances => {
            let Some(id) = string_prop(&props, "id") else { return Ok(None) };
            FeatureRole::Entrance {
                id,
                name: string_prop(&props, "name"),
                elevator: has_elevator_marker(&props),
            }
        }
        Layer::BusStops => {
            let Some(id) = string_prop(&props, "id").or_else(|| string_prop(&props, "name")) else {
                return Ok(None);
            };
            FeatureRole::BusStop { id, name: string_prop(&props, "name") }
        }
        Layer::Floor => floor_role(&props),
    };

    *bad += bad_here;
    Ok(Some(Feature::new(role, geometry)))
}

fn floor_role(props: &Props) -> FeatureRole {
    let id = string_prop(props, "id");
    let corridor = match props.get("feature_type").and_then(Value::as_str) {
        Some("corridor") => true,
        Some("door") => false,
        Some(_) => return FeatureRole::Other,
        None => match id.as_deref() {
            Some(i) if i.starts_with("c_") => true,
            Some(i) if i.starts_with("p_") => false,
            _ => return FeatureRole::Other,
        },
    };
    if corridor { FeatureRole::Corridor { id } } else { FeatureRole::Door { id } }
}

/// `type == "elevator"`, a truthy `is_elevator`, or `elevator == true`.
/// Name-based detection is left to [`Feature::is_elevator`].
fn has_elevator_marker(props: &Props) -> bool {
    let truthy = |v: &Value| match v {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Null => false,
        _ => true,
    };
    props.get("type").and_then(Value::as_str) == Some("elevator")
        || props.get("is_elevator").is_some_and(truthy)
        || props.get("elevator").and_then(Value::as_bool) == Some(true)
}

fn string_prop(props: &Props, key: &str) -> Option<String> {
    match props.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn convert_geometry(raw: RawGeometry, bad: &mut usize) -> GeoJsonResult<Option<Geometry>> {
    let geometry = match raw {
        RawGeometry::Point { coordinates } => Geometry::Point(position(&coordinates)?),
        RawGeometry::MultiPoint { coordinates } => match coordinates.first() {
            Some(first) => Geometry::Point(position(first)?),
            None => return Err(CoreError::EmptyGeometry("MultiPoint").into()),
        },
        RawGeometry::LineString { coordinates } => {
            let l = line(&coordinates, bad);
            require_vertex([&l], "LineString")?;
            Geometry::LineString(l)
        }
        RawGeometry::MultiLineString { coordinates } => {
            let parts: Vec<_> = coordinates.iter().map(|l| line(l, bad)).collect();
            require_vertex(&parts, "MultiLineString")?;
            Geometry::MultiLineString(parts)
        }
        RawGeometry::Polygon { coordinates } => {
            let rings: Vec<_> = coordinates.iter().map(|r| ring(r, bad)).collect();
            require_vertex(rings.first(), "Polygon")?;
            Geometry::Polygon(rings)
        }
        RawGeometry::MultiPolygon { coordinates } => {
            let polys: Vec<Vec<_>> = coordinates
                .iter()
                .map(|p| p.iter().map(|r| ring(r, bad)).collect())
                .collect();
            require_vertex(polys.iter().filter_map(|p| p.first()), "MultiPolygon")?;
            Geometry::MultiPolygon(polys)
        }
        RawGeometry::Unsupported => return Ok(None),
    };
    Ok(Some(geometry))
}

/// Non-numeric components become NaN, which validation reports as
/// non-finite.
fn position(raw: &[Value]) -> GeoJsonResult<Coord> {
    let nums: Vec<f64> = raw.iter().map(|v| v.as_f64().unwrap_or(f64::NAN)).collect();
    Ok(Coord::from_position(&nums)?)
}

fn line(positions: &[Position], bad: &mut usize) -> Vec<Coord> {
    positions
        .iter()
        .map(|p| {
            position(p).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "line position replaced by a gap");
                *bad += 1;
                GAP
            })
        })
        .collect()
}

fn ring(positions: &[Position], bad: &mut usize) -> Vec<Coord> {
    positions
        .iter()
        .filter_map(|p| match position(p) {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::debug!(error = %e, "ring position dropped");
                *bad += 1;
                None
            }
        })
        .collect()
}

/// At least one finite vertex across `lines`.
fn require_vertex<'a, I>(lines: I, kind: &'static str) -> GeoJsonResult<()>
where
    I: IntoIterator<Item = &'a Vec<Coord>>,
{
    if lines.into_iter().flatten().any(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(CoreError::EmptyGeometry(kind).into())
    }
}
