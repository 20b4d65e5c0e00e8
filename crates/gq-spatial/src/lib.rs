//! `gq-spatial` — map projection, marker clustering, and proximity ranking.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`projection`] | `ProjectedPoint`, `Projection` trait, `LinearProjection`  |
//! | [`cluster`]    | `Cluster`, greedy `cluster()`                             |
//! | [`ranker`]     | `sort_by_distance`, `ranked`, `nearest`, `Ranked`         |
//! | [`loader`]     | `load_guide_items_csv`, `load_guide_items_reader`         |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                        |
//!
//! All operations except the loader are pure and synchronous.  Nothing here
//! holds state between calls; the presentation layer decides when to
//! re-cluster or re-rank.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod cluster;
pub mod error;
pub mod loader;
pub mod projection;
pub mod ranker;


pub use cluster::{Cluster, cluster};
pub use error::{SpatialError, SpatialResult};
pub use loader::{load_guide_items_csv, load_guide_items_reader};
pub use projection::{LinearProjection, ProjectedPoint, Projection};
pub use ranker::{Ranked, nearest, ranked, sort_by_distance};
