//! Ordering located items by distance from a reference point.
//!
//! Used by the "show closest" toggle on guide and quest listings and by the
//! "nearest site" card on the landing page.  Items without a valid location
//! are never dropped: they rank as infinitely far away and sort to the end
//! in their original relative order.

use gq_core::{Coordinate, Located};

/// An item paired with its distance from the ranking origin.
#[derive(Debug, PartialEq)]
pub struct Ranked<'a, T> {
    pub item: &'a T,

    /// Great-circle distance in km, or `None` if the item has no valid
    /// location.
    pub distance_km: Option<f64>,
}

// Manual impls: a derive would demand `T: Clone`, but only the reference is copied.
impl<T> Clone for Ranked<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ranked<'_, T> {}

impl<'a, T: Located> Ranked<'a, T> {
    fn measure(item: &'a T, from: Coordinate) -> Self {
        Self {
            item,
            distance_km: item.valid_location().map(|c| from.distance_km(c)),
        }
    }

    #[inline]
    fn sort_key(&self) -> f64 {
        self.distance_km.unwrap_or(f64::INFINITY)
    }
}

/// Every item with its distance from `from`, nearest first.
///
/// The sort is stable: equidistant items keep their input order.
pub fn ranked<T: Located>(items: &[T], from: Coordinate) -> Vec<Ranked<'_, T>> {
    let mut out: Vec<Ranked<'_, T>> = items.iter().map(|item| Ranked::measure(item, from)).collect();
    out.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
    out
}

/// `items` ordered by ascending distance from `from`; the input is untouched.
pub fn sort_by_distance<T: Located>(items: &[T], from: Coordinate) -> Vec<&T> {
    ranked(items, from).into_iter().map(|r| r.item).collect()
}

/// The closest item with a valid location, or `None` if there is none.
///
/// Ties go to the item that appears first in `items`.
pub fn nearest<T: Located>(items: &[T], from: Coordinate) -> Option<Ranked<'_, T>> {
    let mut best: Option<Ranked<'_, T>> = None;
    for item in items {
        let candidate = Ranked::measure(item, from);
        let Some(d) = candidate.distance_km else { continue };
        if best.as_ref().is_none_or(|b| d < b.sort_key()) {
            best = Some(candidate);
        }
    }
    best
}
