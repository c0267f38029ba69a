//! Raw map records as delivered by a document decoder.

/// A named point whose coordinate is still a `"lon,lat[,alt]"` tuple.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointRecord {
    pub id:          String,
    pub coordinates: String,
}

impl PointRecord {
    pub fn new(id: impl Into<String>, coordinates: impl Into<String>) -> Self {
        Self { id: id.into(), coordinates: coordinates.into() }
    }
}

/// A named polyline whose coordinates are whitespace-separated
/// `"lon,lat[,alt]"` tuples.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineRecord {
    pub id:          String,
    pub coordinates: String,
}

impl LineRecord {
    pub fn new(id: impl Into<String>, coordinates: impl Into<String>) -> Self {
        Self { id: id.into(), coordinates: coordinates.into() }
    }
}

/// Which kind of record an issue refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordKind {
    Point,
    Line,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RecordKind::Point => "point",
            RecordKind::Line => "line",
        })
    }
}
