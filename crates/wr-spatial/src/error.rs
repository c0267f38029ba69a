//! Spatial-subsystem error type.
//!
//! "No node near the query" and "no path" are ordinary outcomes and live in
//! [`RouteOutcome`](crate::RouteOutcome); the variants here are failures.

use thiserror::Error;

use wr_core::NodeId;

/// Errors produced by `wr-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    /// The predecessor chain written by the search does not lead back to the
    /// start node.  Always a search defect, never a connectivity property.
    #[error("broken predecessor chain at {at} while reconstructing path")]
    BrokenPredecessorChain { at: NodeId },

    #[error("route search cancelled")]
    Cancelled,
}

pub type SpatialResult<T> = Result<T, SpatialError>;
