//! `cc-core` — foundational types for the Campus Compass routing engine.
//!
//! This crate is a dependency of every other `cc-*` crate.  It has no `cc-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `NodeId`                                                   |
//! | [`geo`]      | `Coord`, `LatLng`, `BoundingBox`, planar distance          |
//! | [`feature`]  | `Geometry`, `FeatureRole`, `Feature`, `feature_center`     |
//! | [`metadata`] | `BuildingMetadata`, `MetadataMap`                          |
//! | [`config`]   | `IndoorConfig`, `OutdoorConfig`, `RoutingConfig`           |
//! | [`route`]    | `RouteResult`, `RouteKind`, `PassedPoint`                  |
//! | [`error`]    | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod feature;
pub mod geo;
pub mod ids;
pub mod metadata;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{IndoorConfig, OutdoorConfig, RoutingConfig, validate_precision};
pub use error::{CoreError, CoreResult};
pub use feature::{Feature, FeatureRole, Geometry, feature_center};
pub use geo::{BoundingBox, Coord, LatLng, planar_distance};
pub use ids::NodeId;
pub use metadata::{BuildingMetadata, MetadataMap};
pub use route::{PassedPoint, RouteKind, RouteResult};
