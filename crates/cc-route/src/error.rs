use thiserror::Error;

use cc_indoor::IndoorError;
use cc_outdoor::OutdoorError;
use cc_path::PathError;

#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("{side} identifier is empty")]
    EmptyIdentifier { side: &'static str },

    #[error("no indoor route from '{start}' to '{end}' on the loaded floor")]
    NoIndoorRoute { start: String, end: String },

    #[error("indoor graph error: {0}")]
    Indoor(#[from] IndoorError),

    #[error(transparent)]
    Outdoor(#[from] OutdoorError),

    #[error(transparent)]
    Path(#[from] PathError),
}

impl RouteError {
    /// `true` when the request could not be served at all, as opposed to a
    /// well-formed request with no connecting path.
    pub fn is_unroutable(&self) -> bool {
        match self {
            RouteError::EmptyIdentifier { .. } => true,
            RouteError::Outdoor(e) => e.is_unroutable(),
            RouteError::Path(PathError::NodeNotInGraph(_)) => true,
            _ => false,
        }
    }
}

pub type PlanResult<T> = Result<T, RouteError>;
