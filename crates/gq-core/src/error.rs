//! Core error type.
//!
//! Sub-crates define their own error enums; this one covers the data-model
//! and configuration failures that belong to no particular component.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("unknown language code {0:?}")]
    UnknownLanguage(String),
}

/// Shorthand result type for `gq-core`.
pub type CoreResult<T> = Result<T, CoreError>;
