//! `wr-core` — foundational types for the `walkroute` walkway router.
//!
//! This crate is a dependency of every other `wr-*` crate.  It has no `wr-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`                                    |
//! | [`geo`]         | `Coordinate`, haversine distance                      |
//! | [`config`]      | `RoutingConfig`, `OutputConfig`, `PixelProjection`    |
//! | [`cancel`]      | `CancelToken`                                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cancel;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cancel::CancelToken;
pub use config::{OutputConfig, PixelProjection, RoutingConfig, DEFAULT_SNAP_TOLERANCE_M};
pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, EARTH_RADIUS_M, polyline_length_m};
pub use ids::{EdgeId, NodeId};
