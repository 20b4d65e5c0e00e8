//! Geofence error types.

use thiserror::Error;

/// Failure reported by a [`LocationSource`][crate::LocationSource] through
/// its error channel.
///
/// The watcher never propagates these; they are logged and the session keeps
/// waiting for the next successful fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("location source error: {0}")]
    Other(String),
}

/// Caller errors from the watcher API.
#[derive(Debug, Error)]
pub enum GeofenceError {
    #[error("geofence radius must be a positive number of km, got {0}")]
    InvalidRadius(f64),
}

pub type GeofenceResult<T> = Result<T, GeofenceError>;
