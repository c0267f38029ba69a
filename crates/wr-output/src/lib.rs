//! `wr-output` — GeoJSON serialization.
//!
//! # Route collections
//!
//! A found route serializes to
//!
//! ```text
//! [ Point(start), LineString(leg 1), …, LineString(leg k), Point(end) ]
//! ```
//!
//! with each line oriented in walking direction.  A trivial route (start and
//! end are the same node) is a single `Point`.  Failed queries serialize to an
//! empty `features` list; the collection's `"status"` member says why.
//!
//! # Map collections
//!
//! [`map_collection`] writes every node and then every edge of a graph, for
//! drawing the whole walkway map.
//!
//! Positions are `[lon, lat]` unless the [`OutputConfig`](wr_core::OutputConfig)
//! carries a pixel projection.

pub mod collection;
pub mod error;
pub mod feature;

#[cfg(test)]
mod tests;

pub use collection::{map_collection, route_collection, to_json_string, RouteStatus};
pub use error::{OutputError, OutputResult};
pub use feature::{edge_feature, node_feature, route_features};
