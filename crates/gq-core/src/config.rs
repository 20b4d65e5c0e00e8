//! Product tunables shared by the spatial, geofence, and quest crates.

use crate::{CoreError, CoreResult, Language, MapBounds};

/// Top-level configuration.
///
/// Typically deserialised from a JSON file by the application crate and
/// handed to the components that need each value.  Library code never reads
/// these as constants; every threshold is passed in as a parameter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuideConfig {
    /// Radius of each item's notification zone.  Default: 0.2 km.
    pub geofence_radius_km: f64,

    /// Pixel distance under which two map markers merge.  Default: 60 px.
    pub cluster_radius_px: f64,

    /// Geographic region covered by the map view.
    pub map_bounds: MapBounds,

    /// Language used when the user has not picked one.
    pub default_language: Language,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            geofence_radius_km: 0.2,
            cluster_radius_px:  60.0,
            map_bounds:         MapBounds::TBILISI,
            default_language:   Language::En,
        }
    }
}

impl GuideConfig {
    /// Reject values the components cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.geofence_radius_km.is_finite() && self.geofence_radius_km > 0.0) {
            return Err(CoreError::Config(format!(
                "geofence_radius_km must be positive, got {}",
                self.geofence_radius_km
            )));
        }
        if !(self.cluster_radius_px.is_finite() && self.cluster_radius_px > 0.0) {
            return Err(CoreError::Config(format!(
                "cluster_radius_px must be positive, got {}",
                self.cluster_radius_px
            )));
        }
        let b = &self.map_bounds;
        if !(b.lat_span() > 0.0 && b.lng_span() > 0.0) {
            return Err(CoreError::Config(format!(
                "map_bounds must have north > south and east > west, got {b:?}"
            )));
        }
        Ok(())
    }
}
