//! Geographic → screen-space projection for the map view.
//!
//! The map is a static image of a fixed region, so the projection is a plain
//! linear min/max mapping: longitude runs left to right across the width,
//! latitude bottom to top across the height (y is flipped so north is up).
//! Projected points depend on the container size and must be recomputed on
//! every layout pass; they are never stored.

use gq_core::{Coordinate, MapBounds};

// ── ProjectedPoint ────────────────────────────────────────────────────────────

/// A point in screen pixels, origin at the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean pixel distance.
    #[inline]
    pub fn distance(self, other: ProjectedPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// ── Projection trait ──────────────────────────────────────────────────────────

/// Pluggable coordinate → pixel mapping used by [`cluster`][crate::cluster].
pub trait Projection {
    fn project(&self, c: Coordinate) -> ProjectedPoint;

    /// `true` when the output box has no area (e.g. the container has not
    /// been laid out yet).  Clustering against a degenerate projection
    /// yields no clusters.
    fn is_degenerate(&self) -> bool {
        false
    }
}

impl<F> Projection for F
where
    F: Fn(Coordinate) -> ProjectedPoint,
{
    fn project(&self, c: Coordinate) -> ProjectedPoint {
        self(c)
    }
}

// ── LinearProjection ──────────────────────────────────────────────────────────

/// Linear projection of `bounds` onto a `width_px × height_px` box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearProjection {
    pub bounds:    MapBounds,
    pub width_px:  f64,
    pub height_px: f64,
}

impl LinearProjection {
    pub fn new(bounds: MapBounds, width_px: f64, height_px: f64) -> Self {
        Self { bounds, width_px, height_px }
    }
}

impl Projection for LinearProjection {
    fn project(&self, c: Coordinate) -> ProjectedPoint {
        let b = &self.bounds;
        let x = (c.lng - b.west) / b.lng_span() * self.width_px;
        let y = self.height_px - (c.lat - b.south) / b.lat_span() * self.height_px;
        ProjectedPoint { x, y }
    }

    fn is_degenerate(&self) -> bool {
        // Written as negated `>` so NaN sizes count as degenerate too.
        !(self.width_px > 0.0
            && self.height_px > 0.0
            && self.bounds.lat_span() != 0.0
            && self.bounds.lng_span() != 0.0)
    }
}
