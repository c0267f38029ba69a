//! `wr-service` — one place to load a walkway map and answer route queries.
//!
//! [`RouteService`] owns the current [`Graph`](wr_spatial::Graph) behind a
//! `RwLock<Arc<Graph>>`.  Every query clones the `Arc` and runs against that
//! snapshot, so a reload never disturbs searches already in flight.
//!
//! ```rust,ignore
//! use wr_core::RoutingConfig;
//! use wr_service::RouteService;
//! use wr_spatial::DijkstraRouter;
//!
//! let service = RouteService::new(RoutingConfig::default(), DijkstraRouter)?;
//! let report  = service.load(&points, &lines);
//! let fc      = service.route_geojson("-112.4503,34.6152", "-112.4489,34.6160")?;
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | `route_batch` fans queries out over Rayon's pool.   |

pub mod error;
pub mod service;


pub use error::{ServiceError, ServiceResult};
pub use service::RouteService;
