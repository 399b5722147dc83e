//! Indoor-subsystem error type.

use thiserror::Error;

use cc_core::{CoreError, NodeId};
use cc_path::PathError;

/// Errors produced by `cc-indoor`.
#[derive(Debug, Error, PartialEq)]
pub enum IndoorError {
    /// An edge named a node the builder never issued.  This is a bug in the
    /// caller of [`GraphBuilder`](crate::GraphBuilder), not bad input data.
    #[error("edge {u} -> {v} references a node outside the graph ({node_count} nodes)")]
    DanglingEdge { u: NodeId, v: NodeId, node_count: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] CoreError),

    #[error(transparent)]
    Path(#[from] PathError),
}

pub type IndoorResult<T> = Result<T, IndoorError>;
