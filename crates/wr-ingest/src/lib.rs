//! `wr-ingest` — the typed boundary between raw map records and the graph.
//!
//! Map documents are decoded elsewhere into [`PointRecord`]s and
//! [`LineRecord`]s whose coordinates are still text (`"lon,lat[,alt]"`
//! tuples, whitespace-separated for lines, as in KML `<coordinates>`).  This
//! crate parses that text into validated [`Coordinate`](wr_core::Coordinate)s
//! before the graph builder sees it.  Malformed records are never rejected:
//! they fall back to degenerate defaults and are listed in an
//! [`IngestReport`].
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`record`]      | `PointRecord`, `LineRecord`                           |
//! | [`parse`]       | `parse_coordinate`, `parse_coordinate_list`, `parse_query` |
//! | [`materialize`] | `materialize`, `build_graph`, `IngestReport`          |
//! | [`error`]       | `IngestError`, `IngestResult`                         |

pub mod error;
pub mod materialize;
pub mod parse;
pub mod record;

#[cfg(test)]
mod tests;

pub use error::{IngestError, IngestResult};
pub use materialize::{
    build_graph, line_to_edge, materialize, point_to_node, IngestReport, Ingested, Recovery,
    RecordIssue,
};
pub use parse::{parse_coordinate, parse_coordinate_list, parse_query};
pub use record::{LineRecord, PointRecord, RecordKind};
