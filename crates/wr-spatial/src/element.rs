//! Immutable map elements: point nodes and polyline edges.

use wr_core::{Coordinate, polyline_length_m};

// ── Node ──────────────────────────────────────────────────────────────────────

/// A named point on the walkway map.
///
/// Identifiers are not required to be unique; duplicates are legal but make
/// lookup by name ambiguous.  Routing always addresses nodes by `NodeId`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    id:    String,
    coord: Coordinate,
}

impl Node {
    pub fn new(id: impl Into<String>, coord: Coordinate) -> Self {
        Self { id: id.into(), coord }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A named walkway segment: an ordered polyline of at least two coordinates
/// plus its precomputed haversine length.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    id:       String,
    coords:   Vec<Coordinate>,
    length_m: f64,
}

impl Edge {
    /// Build an edge from its polyline.
    ///
    /// Fewer than two coordinates yields the degenerate edge
    /// `[ZERO, ZERO]` with length 0 instead of an error.  Such an edge only
    /// enters the routable graph if a node sits within tolerance of `(0, 0)`.
    pub fn new(id: impl Into<String>, coords: Vec<Coordinate>) -> Self {
        let id = id.into();
        if coords.len() < 2 {
            return Self::degenerate(id);
        }
        let length_m = polyline_length_m(&coords);
        Self { id, coords, length_m }
    }

    /// Zero-length placeholder edge at the origin.
    pub fn degenerate(id: impl Into<String>) -> Self {
        Self {
            id:       id.into(),
            coords:   vec![Coordinate::ZERO, Coordinate::ZERO],
            length_m: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Length in metres, used as the routing weight.
    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    /// First polyline coordinate.
    pub fn first(&self) -> Coordinate {
        self.coords.first().copied().unwrap_or(Coordinate::ZERO)
    }

    /// Last polyline coordinate.
    pub fn last(&self) -> Coordinate {
        self.coords.last().copied().unwrap_or(Coordinate::ZERO)
    }
}
