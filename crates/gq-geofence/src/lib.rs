//! `gq-geofence` — proximity notifications driven by a location source.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`source`]  | `LocationSource` trait, `ManualLocationSource`, `WatchId`         |
//! | [`watcher`] | `GeofenceWatcher<S, T>`, first-entry notifications per session    |
//! | [`error`]   | `LocationError`, `GeofenceError`, `GeofenceResult<T>`             |
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut watcher = GeofenceWatcher::new(platform_gps);
//! watcher.start_watching(guide_items, config.geofence_radius_km, move |item| {
//!     notifications.push(item.title.get(lang).clone());
//! })?;
//! // ... later, when the page goes away:
//! watcher.stop_watching();
//! ```
//!
//! The watcher is an ordinary value owned by whoever manages the page
//! lifecycle.  Two watchers over the same source are independent.

pub mod error;
pub mod source;
pub mod watcher;


pub use error::{GeofenceError, GeofenceResult, LocationError};
pub use source::{LocationCallback, LocationSource, LocationUpdate, ManualLocationSource, WatchId};
pub use watcher::GeofenceWatcher;
