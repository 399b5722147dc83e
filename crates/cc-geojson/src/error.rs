use thiserror::Error;

use cc_core::CoreError;

#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a FeatureCollection, found {0}")]
    NotACollection(String),

    #[error("invalid geometry: {0}")]
    Geometry(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GeoJsonResult<T> = Result<T, GeoJsonError>;
