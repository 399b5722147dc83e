//! `cc-outdoor` — campus footpath routing between buildings and bus stops.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `FootpathNetwork` (adjacency + R-tree), builder             |
//! | [`finder`]  | `PathFinder` trait, `FoundPath`                             |
//! | [`resolve`] | `OutdoorRequest`, endpoint → candidate coordinates          |
//! | [`engine`]  | `find_outdoor_route`, `find_route_with`                     |
//! | [`error`]   | `OutdoorError`, `OutdoorResult<T>`                          |
//!
//! # Pluggability
//!
//! The engine only talks to the footpath graph through [`PathFinder`], so a
//! different planar path-finder can be swapped in without touching endpoint
//! resolution or entrance-pair selection.

pub mod engine;
pub mod error;
pub mod finder;
pub mod network;
pub mod resolve;


pub use engine::{find_outdoor_route, find_route_with};
pub use error::{OutdoorError, OutdoorResult};
pub use finder::{FoundPath, PathFinder};
pub use network::{FootpathNetwork, FootpathNetworkBuilder};
pub use resolve::{EndpointKind, OutdoorRequest, ResolvedEndpoint, resolve_endpoint};
