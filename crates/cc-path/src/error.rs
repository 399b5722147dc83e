//! Path-solver error type.

use thiserror::Error;

use cc_core::NodeId;

/// Errors produced by `cc-path`.
///
/// "No route between two valid nodes" is *not* an error; [`dijkstra`]
/// reports it as `Ok(None)`.
///
/// [`dijkstra`]: crate::dijkstra
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("node {0} not in graph")]
    NodeNotInGraph(NodeId),

    #[error("arc {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },
}

pub type PathResult<T> = Result<T, PathError>;
