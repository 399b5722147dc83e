//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced while validating raw geometry or configuration.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("position has {0} components, expected at least 2")]
    ShortPosition(usize),

    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    #[error("empty geometry: {0}")]
    EmptyGeometry(&'static str),

    #[error("config field `{field}` = {value} is out of range ({expected})")]
    InvalidConfig { field: &'static str, value: f64, expected: &'static str },
}

/// Shorthand result type for `cc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
