//! Nearest-node snapping.
//!
//! A linear scan over the node arena.  Maps are campus-sized (hundreds of
//! nodes), and the scan order is part of the contract: among nodes at the
//! same minimum distance the earliest-inserted one wins, which a spatial
//! tree would not guarantee.

use wr_core::{Coordinate, NodeId};

use crate::element::Node;

/// A successful snap: the chosen node and its distance from the query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snap {
    pub node:       NodeId,
    pub distance_m: f64,
}

/// Return the node closest to `coord`, or `None` if no node lies within
/// `tolerance_m` metres.
///
/// A node at exactly `tolerance_m` is accepted.  An empty node list, or a
/// query whose distances are all NaN, yields `None`.
pub fn nearest_node(nodes: &[Node], coord: Coordinate, tolerance_m: f64) -> Option<Snap> {
    let mut best: Option<Snap> = None;
    for (i, node) in nodes.iter().enumerate() {
        let d = coord.distance_m(node.coord());
        let closer = match best {
            Some(b) => d < b.distance_m,
            None => d < f64::INFINITY,
        };
        if closer {
            best = Some(Snap { node: NodeId(i as u32), distance_m: d });
        }
    }
    best.filter(|s| s.distance_m <= tolerance_m)
}
