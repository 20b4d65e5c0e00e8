//! `gq-core` — foundational types for the geoquest city-guide core.
//!
//! This crate is a dependency of every other `gq-*` crate.  It has no
//! `gq-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`geo`]    | `Coordinate`, haversine `distance_km`, `MapBounds`        |
//! | [`ids`]    | `ItemId`, `QuestId`, `UserId`                             |
//! | [`i18n`]   | `Language`, `Localized<T>`                                |
//! | [`item`]   | `Located` trait, `LocatedItem`, `GuideItem`, `Category`   |
//! | [`config`] | `GuideConfig`                                             |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod i18n;
pub mod ids;
pub mod item;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GuideConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, EARTH_RADIUS_KM, MapBounds, distance_km};
pub use i18n::{Language, Localized};
pub use ids::{ItemId, QuestId, UserId};
pub use item::{Category, GuideItem, Located, LocatedItem};
