//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The service layer calls routing through the [`Router`] trait, so
//! applications can swap in another search (A*, a precomputed all-pairs table)
//! without touching graph construction or serialization.  The default
//! [`DijkstraRouter`] is exact for the non-negative edge lengths the graph
//! carries.
//!
//! # Outcomes vs. errors
//!
//! Failing to snap a query coordinate and finding no path are ordinary
//! results, reported as [`RouteOutcome`] variants.  `Err` is reserved for
//! invalid node ids, cancellation, and search defects
//! ([`SpatialError::BrokenPredecessorChain`]).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, error, warn};

use wr_core::{CancelToken, Coordinate, EdgeId, NodeId};

use crate::network::Graph;
use crate::{SpatialError, SpatialResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// One traversed edge, with the direction it was walked in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub edge: EdgeId,
    pub from: NodeId,
    pub to:   NodeId,
}

impl Leg {
    /// `true` if this leg walks `edge` against its stored polyline order,
    /// i.e. from the node its last coordinate snapped to towards the node its
    /// first coordinate snapped to.
    pub fn is_reversed(&self, graph: &Graph) -> bool {
        matches!(graph.endpoints(self.edge), Some((first, _)) if first != self.from)
    }
}

/// A shortest path between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub start: NodeId,
    pub end:   NodeId,
    /// Edges to traverse in order, from `start` to `end`.
    pub legs:  Vec<Leg>,
    /// Sum of the traversed edge lengths, metres.
    pub total_length_m: f64,
}

impl Route {
    /// The zero-length route from a node to itself.
    pub fn trivial(node: NodeId) -> Self {
        Self { start: node, end: node, legs: Vec::new(), total_length_m: 0.0 }
    }

    /// `true` if the start and end are the same node.
    pub fn is_trivial(&self) -> bool {
        self.legs.is_empty()
    }

    /// Node sequence visited by the route, `start` first and `end` last.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.legs.len() + 1);
        out.push(self.start);
        out.extend(self.legs.iter().map(|l| l.to));
        out
    }
}

/// Which query coordinate failed to snap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryEndpoint {
    Start,
    End,
}

impl std::fmt::Display for QueryEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            QueryEndpoint::Start => "start",
            QueryEndpoint::End => "end",
        })
    }
}

/// Result of a coordinate-to-coordinate routing query.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteOutcome {
    Found(Route),
    /// No node lies within the snapping tolerance of this query coordinate.
    NoNodeFound(QueryEndpoint),
    /// Both coordinates snapped, but the nodes are not connected.
    NoPath { from: NodeId, to: NodeId },
}

impl RouteOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve concurrent
/// queries against a shared graph snapshot.
pub trait Router: Send + Sync {
    /// Compute a shortest route from `from` to `to`.
    ///
    /// Returns `Ok(None)` if no path exists.  `from == to` yields a trivial
    /// route rather than `None`.
    fn route(
        &self,
        graph: &Graph,
        from: NodeId,
        to: NodeId,
        cancel: &CancelToken,
    ) -> SpatialResult<Option<Route>>;
}

/// Snap both coordinates, then route between the snapped nodes.
///
/// The start coordinate is snapped first; if both fail, the outcome names
/// the start.
pub fn route_between<R: Router + ?Sized>(
    graph: &Graph,
    router: &R,
    start: Coordinate,
    end: Coordinate,
    cancel: &CancelToken,
) -> SpatialResult<RouteOutcome> {
    let Some(from) = graph.nearest(start) else {
        debug!(%start, "no node within tolerance of start coordinate");
        return Ok(RouteOutcome::NoNodeFound(QueryEndpoint::Start));
    };
    let Some(to) = graph.nearest(end) else {
        debug!(%end, "no node within tolerance of end coordinate");
        return Ok(RouteOutcome::NoNodeFound(QueryEndpoint::End));
    };
    debug!(
        from = %from.node,
        from_offset_m = from.distance_m,
        to = %to.node,
        to_offset_m = to.distance_m,
        "query coordinates snapped"
    );

    Ok(match router.route(graph, from.node, to.node, cancel)? {
        Some(route) => {
            debug!(legs = route.legs.len(), length_m = route.total_length_m, "route found");
            RouteOutcome::Found(route)
        }
        None => {
            debug!(from = %from.node, to = %to.node, "snapped nodes are not connected");
            RouteOutcome::NoPath { from: from.node, to: to.node }
        }
    })
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the walkway graph, weighted by edge length.
///
/// Among equal tentative distances the lower `NodeId` is settled first, so
/// repeated queries on the same graph always return the same route.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph: &Graph,
        from: NodeId,
        to: NodeId,
        cancel: &CancelToken,
    ) -> SpatialResult<Option<Route>> {
        dijkstra(graph, from, to, cancel)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq)]
struct State {
    dist: f64,
    node: NodeId,
}

impl Eq for State {}

// Reversed so `BinaryHeap` (a max-heap) pops the smallest distance first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(
    graph: &Graph,
    from: NodeId,
    to: NodeId,
    cancel: &CancelToken,
) -> SpatialResult<Option<Route>> {
    let n = graph.node_count();
    for id in [from, to] {
        if id.index() >= n {
            return Err(SpatialError::NodeNotFound(id));
        }
    }
    if from == to {
        return Ok(Some(Route::trivial(from)));
    }

    // dist[v] = best known length to reach v; settled[v] once finalized.
    let mut dist    = vec![f64::INFINITY; n];
    let mut settled = vec![false; n];
    // prev[v] = leg that reached v, absent for unreached nodes and the start.
    let mut prev: Vec<Option<Leg>> = vec![None; n];

    dist[from.index()] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(State { dist: 0.0, node: from });

    while let Some(State { dist: d, node }) = heap.pop() {
        // Skip stale heap entries.
        if settled[node.index()] || d > dist[node.index()] {
            continue;
        }
        if cancel.is_cancelled() {
            warn!(from = %from, to = %to, "route search cancelled");
            return Err(SpatialError::Cancelled);
        }
        if node == to {
            return reconstruct(&prev, from, to, d).map(Some);
        }
        settled[node.index()] = true;

        for (next, edge) in graph.neighbors(node) {
            if settled[next.index()] {
                continue;
            }
            let Some(e) = graph.edge(edge) else { continue };
            let candidate = d + e.length_m();
            if candidate < dist[next.index()] {
                dist[next.index()] = candidate;
                prev[next.index()] = Some(Leg { edge, from: node, to: next });
                heap.push(State { dist: candidate, node: next });
            }
        }
    }

    // Every node still unsettled has an infinite tentative distance.
    Ok(None)
}

/// Walk the predecessor legs back from `to` to `from`.
///
/// A missing predecessor, or a walk longer than the node count (a cycle), means
/// the search wrote an inconsistent chain.
pub(crate) fn reconstruct(
    prev: &[Option<Leg>],
    from: NodeId,
    to: NodeId,
    total_length_m: f64,
) -> SpatialResult<Route> {
    let mut legs = Vec::new();
    let mut cur = to;
    while cur != from {
        let leg = match prev.get(cur.index()).copied().flatten() {
            Some(leg) if legs.len() < prev.len() => leg,
            _ => {
                error!(at = %cur, from = %from, to = %to, "broken predecessor chain");
                return Err(SpatialError::BrokenPredecessorChain { at: cur });
            }
        };
        legs.push(leg);
        cur = leg.from;
    }
    legs.reverse();
    Ok(Route { start: from, end: to, legs, total_length_m })
}
