//! Geographic coordinate type and great-circle distance.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Guide items and quest steps
//! sit a few hundred metres apart and the product's geofence radius is
//! 200 m, so single precision would eat a visible share of the margin.

use crate::{CoreError, CoreResult};

/// Mean Earth radius in kilometres, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Construct a coordinate, rejecting values outside the WGS-84 ranges.
    pub fn try_new(lat: f64, lng: f64) -> CoreResult<Self> {
        let c = Self { lat, lng };
        if c.is_valid() {
            Ok(c)
        } else {
            Err(CoreError::InvalidCoordinate { lat, lng })
        }
    }

    /// `true` when both components are finite and inside the WGS-84 ranges
    /// (lat ∈ [-90, 90], lng ∈ [-180, 180]).
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric and zero for identical points.  No validation is done here:
    /// out-of-range input yields a meaningless (but finite or NaN) number.
    pub fn distance_km(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

/// Free-function form of [`Coordinate::distance_km`].
#[inline]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    a.distance_km(b)
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

// ── MapBounds ─────────────────────────────────────────────────────────────────

/// A geographic bounding box, used as the input range of the map projection.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub west:  f64,
    pub east:  f64,
}

impl MapBounds {
    /// Central Tbilisi, the region the product's map image covers.
    pub const TBILISI: MapBounds = MapBounds {
        north: 41.8,
        south: 41.6,
        west:  44.7,
        east:  44.95,
    };

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    #[inline]
    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }

    /// Inclusive containment check.
    pub fn contains(&self, c: Coordinate) -> bool {
        (self.south..=self.north).contains(&c.lat) && (self.west..=self.east).contains(&c.lng)
    }
}
