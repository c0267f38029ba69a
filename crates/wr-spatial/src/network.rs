//! Walkway graph representation and builder.
//!
//! # Data layout
//!
//! Nodes and edges live in two arenas indexed by `NodeId` / `EdgeId`
//! (insertion order).  Connectivity is a per-node neighbour map:
//!
//! ```text
//! adjacency[a] : FxHashMap<NodeId, EdgeId>     // b -> edge joining a and b
//! ```
//!
//! The relation is symmetric (`adjacency[a][b] == adjacency[b][a]`) and holds
//! at most one edge per unordered node pair.  An edge only appears in it if
//! both of its polyline endpoints snapped to a node during [`GraphBuilder::build`];
//! unsnapped edges stay in the arena (so they can still be drawn) but are
//! invisible to routing.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use wr_core::{Coordinate, EdgeId, NodeId, DEFAULT_SNAP_TOLERANCE_M};

use crate::element::{Edge, Node};
use crate::snap::{nearest_node, Snap};

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Immutable, routable walkway graph.
///
/// Do not construct directly; use [`GraphBuilder`].  A `Graph` is `Send +
/// Sync` and never mutated after construction, so any number of queries may
/// share it behind an `Arc`.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,

    /// Neighbour map per node.  Indexed by `NodeId`.
    adjacency: Vec<FxHashMap<NodeId, EdgeId>>,

    /// Snapped `(first, last)` endpoint nodes per edge; `None` for edges that
    /// did not attach.  Indexed by `EdgeId`.
    endpoints: Vec<Option<(NodeId, NodeId)>>,

    snap_tolerance_m: f64,
}

impl Graph {
    /// A graph with no nodes or edges.  Every query against it snaps to
    /// nothing.
    pub fn empty() -> Self {
        GraphBuilder::new(DEFAULT_SNAP_TOLERANCE_M).build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the arena, routable or not.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of unordered node pairs joined by an edge.
    pub fn connection_count(&self) -> usize {
        let mut directed = 0;
        let mut self_loops = 0;
        for (a, neighbours) in self.adjacency.iter().enumerate() {
            directed += neighbours.len();
            if neighbours.contains_key(&NodeId(a as u32)) {
                self_loops += 1;
            }
        }
        (directed - self_loops) / 2 + self_loops
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn snap_tolerance_m(&self) -> f64 {
        self.snap_tolerance_m
    }

    // ── Element access ────────────────────────────────────────────────────

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Snapped endpoints of `edge`, or `None` if it never joined the graph.
    pub fn endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.endpoints.get(edge.index()).copied().flatten()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// The edge joining `a` and `b`, if any.  Symmetric in its arguments.
    pub fn connection(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.adjacency.get(a.index())?.get(&b).copied()
    }

    /// `(neighbour, edge)` pairs adjacent to `node`.  Empty for unknown ids.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, EdgeId)> + '_ {
        self.adjacency
            .get(node.index())
            .into_iter()
            .flat_map(|m| m.iter().map(|(&n, &e)| (n, e)))
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(node.index()).map_or(0, FxHashMap::len)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Snap `coord` to the nearest node within this graph's tolerance.
    pub fn nearest(&self, coord: Coordinate) -> Option<Snap> {
        nearest_node(&self.nodes, coord, self.snap_tolerance_m)
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Collect nodes and edges, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use wr_core::Coordinate;
/// use wr_spatial::{Edge, GraphBuilder, Node};
///
/// let mut b = GraphBuilder::new(5.0);
/// let a = b.add_node(Node::new("A", Coordinate::new(0.0, 0.0)));
/// let c = b.add_node(Node::new("C", Coordinate::new(0.0, 0.001)));
/// b.add_edge(Edge::new("A-C", vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)]));
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert!(g.connection(a, c).is_some());
/// ```
pub struct GraphBuilder {
    nodes:            Vec<Node>,
    edges:            Vec<Edge>,
    snap_tolerance_m: f64,
}

impl GraphBuilder {
    pub fn new(snap_tolerance_m: f64) -> Self {
        Self { nodes: Vec::new(), edges: Vec::new(), snap_tolerance_m }
    }

    pub fn with_capacity(snap_tolerance_m: f64, nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            snap_tolerance_m,
        }
    }

    /// Convenience: builder pre-loaded with already materialized elements.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>, snap_tolerance_m: f64) -> Self {
        Self { nodes, edges, snap_tolerance_m }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add an edge candidate and return its `EdgeId` (sequential from 0).
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(edge);
        id
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`Graph`].
    ///
    /// Each edge's first and last coordinates are snapped independently
    /// against every node (O(E·N)).  Edges are processed in insertion order,
    /// so when two edges join the same node pair the later one wins.
    /// Building never fails; unsnappable edges only reduce connectivity.
    pub fn build(self) -> Graph {
        let node_count = self.nodes.len();
        let mut adjacency: Vec<FxHashMap<NodeId, EdgeId>> =
            vec![FxHashMap::default(); node_count];
        let mut endpoints: Vec<Option<(NodeId, NodeId)>> = vec![None; self.edges.len()];

        for (i, edge) in self.edges.iter().enumerate() {
            let eid = EdgeId(i as u32);
            let start = nearest_node(&self.nodes, edge.first(), self.snap_tolerance_m);
            let end = nearest_node(&self.nodes, edge.last(), self.snap_tolerance_m);

            let (Some(start), Some(end)) = (start, end) else {
                debug!(
                    edge = edge.id(),
                    start_snapped = start.is_some(),
                    end_snapped = end.is_some(),
                    "edge endpoints not within tolerance of a node; skipping"
                );
                continue;
            };
            let (a, b) = (start.node, end.node);

            // A replaced pair connection leaves the old edge unreachable.
            if let Some(previous) = adjacency[a.index()].insert(b, eid) {
                debug!(
                    replaced = self.edges[previous.index()].id(),
                    by = edge.id(),
                    "node pair already connected; later edge wins"
                );
                endpoints[previous.index()] = None;
            }
            adjacency[b.index()].insert(a, eid);
            endpoints[i] = Some((a, b));
        }

        let graph = Graph {
            nodes: self.nodes,
            edges: self.edges,
            adjacency,
            endpoints,
            snap_tolerance_m: self.snap_tolerance_m,
        };

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            connections = graph.connection_count(),
            tolerance_m = graph.snap_tolerance_m,
            "walkway graph built"
        );
        graph
    }
}
