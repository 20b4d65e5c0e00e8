//! Greedy marker clustering for the map view.
//!
//! # Algorithm
//!
//! Single pass, seed order = input order:
//!
//! 1. Project every located item to pixel space.
//! 2. For each item `i` not yet claimed, open a cluster seeded with `i`.
//!    Every unclaimed `j > i` whose pixel distance to `i` is strictly less
//!    than `radius_px` joins it.
//! 3. Emit clusters in seed order.
//!
//! Membership is decided against the seed only, not against the growing
//! cluster, so the result is order dependent: with A–B and B–C close but
//! A–C far, input `[A, B, C]` gives `{A, B}, {C}` while `[B, A, C]` gives
//! `{B, A, C}`.  The cluster's `center` is the seed's projected point, not
//! the centroid of its members.
//!
//! # Complexity
//!
//! O(n²) distance checks.  Intended for the tens to low hundreds of markers
//! a city guide shows at once; a grid or R-tree bucketing pass would be
//! needed well before thousands.
//!
//! `radius_px` is a screen threshold, so results change with zoom and
//! container size.  Callers re-run `cluster` whenever the projection changes.

use gq_core::{ItemId, Located};

use crate::{ProjectedPoint, Projection};

/// A group of items drawn as one map marker.
#[derive(Debug, PartialEq)]
pub struct Cluster<'a, T> {
    /// The seed item's id; stable across passes while the seed stays first.
    pub id: ItemId,

    /// Members in input order, seed first.  Never empty.
    pub items: Vec<&'a T>,

    /// Projected point of the seed item.
    pub center: ProjectedPoint,
}

// Manual impl: a derive would demand `T: Clone`, but only references are copied.
impl<T> Clone for Cluster<'_, T> {
    fn clone(&self) -> Self {
        Self {
            id:     self.id.clone(),
            items:  self.items.clone(),
            center: self.center,
        }
    }
}

impl<T> Cluster<'_, T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never `true` for clusters produced by [`cluster`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A lone marker, drawn with the item's own pin rather than a count badge.
    #[inline]
    pub fn is_single(&self) -> bool {
        self.items.len() == 1
    }
}

/// Partition `items` into pixel-space clusters.
///
/// Returns an empty list for empty input or a degenerate projection.  Items
/// with no location cannot be placed on the map and are left out; every
/// other item lands in exactly one cluster.  Coordinates are handed to the
/// projection as-is, so filtering out garbage is the caller's job.
pub fn cluster<'a, T, P>(items: &'a [T], projection: &P, radius_px: f64) -> Vec<Cluster<'a, T>>
where
    T: Located,
    P: Projection + ?Sized,
{
    if items.is_empty() || projection.is_degenerate() {
        return Vec::new();
    }

    let projected: Vec<(&'a T, ProjectedPoint)> = items
        .iter()
        .filter_map(|item| match item.location() {
            Some(c) => Some((item, projection.project(c))),
            None => {
                tracing::debug!(id = %item.id(), "item has no location; not clustered");
                None
            }
        })
        .collect();

    let mut claimed = vec![false; projected.len()];
    let mut clusters = Vec::new();

    for i in 0..projected.len() {
        if claimed[i] {
            continue;
        }
        claimed[i] = true;

        let (seed, center) = projected[i];
        let mut members = vec![seed];

        for j in (i + 1)..projected.len() {
            if claimed[j] {
                continue;
            }
            let (other, point) = projected[j];
            if center.distance(point) < radius_px {
                members.push(other);
                claimed[j] = true;
            }
        }

        clusters.push(Cluster {
            id: ItemId::from(seed.id()),
            items: members,
            center,
        });
    }

    clusters
}
