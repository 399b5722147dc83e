//! `cc-geojson` — turns raw GeoJSON into typed campus features.
//!
//! All duck-typing happens here, once: a feature's role is decided by the
//! layer it was loaded from plus a few well-known properties, and its
//! geometry is validated into a closed [`Geometry`](cc_core::Geometry)
//! variant.  Features that fail validation are skipped and counted, never
//! fatal.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`layer`]    | `Layer`, `LoadedLayer`, `parse_layer`, `load_layer`       |
//! | [`metadata`] | `parse_metadata`, `load_metadata_dir`                     |
//! | [`error`]    | `GeoJsonError`, `GeoJsonResult<T>`                        |

pub mod error;
pub mod layer;
pub mod metadata;


pub use error::{GeoJsonError, GeoJsonResult};
pub use layer::{GAP, Layer, LoadedLayer, load_layer, parse_layer, read_layer};
pub use metadata::{load_metadata_dir, parse_metadata};
