//! Record → element materialization.
//!
//! | Record problem                         | Recovery                         |
//! |----------------------------------------|----------------------------------|
//! | point coordinate malformed             | node placed at `(0, 0)`          |
//! | some line tuples malformed             | those tuples dropped             |
//! | fewer than 2 valid line tuples remain  | degenerate `[(0,0), (0,0)]` edge |
//!
//! Recoveries are logged at `warn` and collected in [`IngestReport`];
//! materialization itself never fails.

use tracing::{info, warn};

use wr_core::{Coordinate, RoutingConfig};
use wr_spatial::{Edge, Graph, GraphBuilder, Node};

use crate::parse::{parse_coordinate, parse_coordinate_list};
use crate::record::{LineRecord, PointRecord, RecordKind};
use crate::IngestError;

/// What was done about a malformed record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// The point was placed at `Coordinate::ZERO`.
    ZeroCoordinate,
    /// The offending tuple was left out of the polyline.
    DroppedTuple,
    /// The line was replaced by the zero-length edge at the origin.
    DegenerateEdge,
}

/// One recovered problem in one record.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordIssue {
    pub record_id: String,
    pub kind:      RecordKind,
    pub error:     IngestError,
    pub recovery:  Recovery,
}

/// Summary of one ingestion batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngestReport {
    pub points: usize,
    pub lines:  usize,
    pub issues: Vec<RecordIssue>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn record(&mut self, issue: RecordIssue) {
        warn!(
            kind = %issue.kind,
            record = %issue.record_id,
            recovery = ?issue.recovery,
            "{}",
            issue.error
        );
        self.issues.push(issue);
    }
}

/// Materialized elements plus the report of what had to be recovered.
#[derive(Debug)]
pub struct Ingested {
    pub nodes:  Vec<Node>,
    pub edges:  Vec<Edge>,
    pub report: IngestReport,
}

/// Turn one point record into a node.
pub fn point_to_node(record: &PointRecord) -> (Node, Option<RecordIssue>) {
    match parse_coordinate(&record.coordinates) {
        Ok(coord) => (Node::new(record.id.clone(), coord), None),
        Err(error) => (
            Node::new(record.id.clone(), Coordinate::ZERO),
            Some(RecordIssue {
                record_id: record.id.clone(),
                kind:      RecordKind::Point,
                error,
                recovery:  Recovery::ZeroCoordinate,
            }),
        ),
    }
}

/// Turn one line record into an edge.
pub fn line_to_edge(record: &LineRecord) -> (Edge, Vec<RecordIssue>) {
    let issue = |error, recovery| RecordIssue {
        record_id: record.id.clone(),
        kind: RecordKind::Line,
        error,
        recovery,
    };

    let (coords, errors) = parse_coordinate_list(&record.coordinates);
    let mut issues: Vec<RecordIssue> =
        errors.into_iter().map(|e| issue(e, Recovery::DroppedTuple)).collect();

    if coords.len() < 2 {
        issues.push(issue(
            IngestError::TooFewCoordinates { found: coords.len() },
            Recovery::DegenerateEdge,
        ));
        return (Edge::degenerate(record.id.clone()), issues);
    }
    (Edge::new(record.id.clone(), coords), issues)
}

/// Materialize a batch of records, preserving input order.
pub fn materialize(points: &[PointRecord], lines: &[LineRecord]) -> Ingested {
    let mut report = IngestReport { points: points.len(), lines: lines.len(), issues: Vec::new() };

    let mut nodes = Vec::with_capacity(points.len());
    for p in points {
        let (node, issue) = point_to_node(p);
        if let Some(issue) = issue {
            report.record(issue);
        }
        nodes.push(node);
    }

    let mut edges = Vec::with_capacity(lines.len());
    for l in lines {
        let (edge, issues) = line_to_edge(l);
        for issue in issues {
            report.record(issue);
        }
        edges.push(edge);
    }

    info!(
        points = report.points,
        lines = report.lines,
        issues = report.issues.len(),
        "map records materialized"
    );
    Ingested { nodes, edges, report }
}

/// Materialize records and build the routable graph in one step.
pub fn build_graph(
    points: &[PointRecord],
    lines: &[LineRecord],
    config: &RoutingConfig,
) -> (Graph, IngestReport) {
    let Ingested { nodes, edges, report } = materialize(points, lines);
    let graph = GraphBuilder::from_parts(nodes, edges, config.snap_tolerance_m).build();
    (graph, report)
}
