//! Outdoor-subsystem error type.

use thiserror::Error;

use cc_core::CoreError;
use cc_path::PathError;

/// Errors produced by `cc-outdoor`.
///
/// `Unroutable`: the request itself cannot be served.  `NoRoute`: the
/// footpaths do not connect any candidate pair.
#[derive(Debug, Error, PartialEq)]
pub enum OutdoorError {
    #[error("'{id}' does not resolve to any usable entrance or bus stop")]
    Unroutable { id: String },

    #[error("no footpath route from '{start}' to '{end}'")]
    NoRoute { start: String, end: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] CoreError),

    #[error(transparent)]
    Path(#[from] PathError),
}

impl OutdoorError {
    /// `true` for failures caused by the request rather than the network.
    pub fn is_unroutable(&self) -> bool {
        matches!(self, OutdoorError::Unroutable { .. })
    }
}

pub type OutdoorResult<T> = Result<T, OutdoorError>;
