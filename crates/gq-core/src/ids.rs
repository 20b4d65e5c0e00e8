//! Strongly typed string identifiers.
//!
//! Ids come from the item-data provider as opaque strings (`"nar-fort"`,
//! `"q-old-town"`).  Wrapping them keeps an `ItemId` from being passed where
//! a `QuestId` is expected.  All ids are `Clone + Ord + Hash` so they can be
//! used as map and set keys without ceremony.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed id wrapper around a `String`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id! {
    /// Id of a located item (guide entry or quest step), unique within its
    /// collection.
    pub struct ItemId;
}

typed_id! {
    /// Id of a quest.
    pub struct QuestId;
}

typed_id! {
    /// Id of the purchaser playing a quest.
    pub struct UserId;
}
