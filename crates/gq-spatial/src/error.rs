//! Spatial-subsystem error type.
//!
//! Only the loader can fail.  Projection, clustering, and ranking are total
//! over their inputs.

use thiserror::Error;

/// Errors produced by `gq-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("guide item parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
