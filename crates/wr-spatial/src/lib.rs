//! `wr-spatial` — walkway graph, snapping, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`element`] | `Node`, `Edge` (immutable map elements)                     |
//! | [`network`] | `Graph` (arenas + symmetric adjacency), `GraphBuilder`      |
//! | [`snap`]    | `nearest_node`, `Snap`                                      |
//! | [`router`]  | `Router` trait, `DijkstraRouter`, `Route`, `RouteOutcome`   |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod element;
pub mod error;
pub mod network;
pub mod router;
pub mod snap;


pub use element::{Edge, Node};
pub use error::{SpatialError, SpatialResult};
pub use network::{Graph, GraphBuilder};
pub use router::{route_between, DijkstraRouter, Leg, QueryEndpoint, Route, RouteOutcome, Router};
pub use snap::{nearest_node, Snap};
