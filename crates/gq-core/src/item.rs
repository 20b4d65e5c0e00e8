//! Anything with an id and a place on the map.

use crate::{Coordinate, ItemId, Localized};

/// An entity the proximity code can measure, rank, cluster, and geofence.
///
/// Guide entries and quest steps both implement this; nothing else about
/// them matters to the spatial subsystem.
pub trait Located {
    /// Identifier, unique within the collection being processed.
    fn id(&self) -> &str;

    /// The item's position, or `None` if the provider has none on record.
    fn location(&self) -> Option<Coordinate>;

    /// The location, filtered to coordinates that pass
    /// [`Coordinate::is_valid`].
    #[inline]
    fn valid_location(&self) -> Option<Coordinate> {
        self.location().filter(|c| c.is_valid())
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn location(&self) -> Option<Coordinate> {
        (**self).location()
    }
}

// ── LocatedItem ───────────────────────────────────────────────────────────────

/// The bare `(id, location)` pair.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocatedItem {
    pub id:       ItemId,
    pub location: Option<Coordinate>,
}

impl LocatedItem {
    pub fn new(id: impl Into<ItemId>, location: Coordinate) -> Self {
        Self { id: id.into(), location: Some(location) }
    }

    pub fn unlocated(id: impl Into<ItemId>) -> Self {
        Self { id: id.into(), location: None }
    }
}

impl Located for LocatedItem {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn location(&self) -> Option<Coordinate> {
        self.location
    }
}

// ── GuideItem ─────────────────────────────────────────────────────────────────

/// Section of the city guide an entry is listed under.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Sites,
    Restaurants,
    Services,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sites       => "sites",
            Category::Restaurants => "restaurants",
            Category::Services    => "services",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A city-guide entry as delivered by the item-data provider, trimmed to the
/// fields the proximity subsystem and its notifications use.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideItem {
    pub id:       ItemId,
    pub category: Category,
    pub title:    Localized,
    pub location: Option<Coordinate>,
}

impl Located for GuideItem {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn location(&self) -> Option<Coordinate> {
        self.location
    }
}
