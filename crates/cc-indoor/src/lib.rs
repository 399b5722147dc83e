//! `cc-indoor` — floor graphs built from corridor and door features.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `Graph` (node/edge arena), `GraphBuilder`, `Node`, `Edge`   |
//! | [`builder`] | `build_indoor_graph`, `BuildReport`, loose-end merging      |
//! | [`error`]   | `IndoorError`, `IndoorResult<T>`                            |

pub mod builder;
pub mod error;
pub mod graph;

#[cfg(test)]
mod tests;

pub use builder::{BuildReport, build_indoor_graph, merge_loose_endpoints};
pub use error::{IndoorError, IndoorResult};
pub use graph::{Edge, Graph, GraphBuilder, Node, NodeKind};
