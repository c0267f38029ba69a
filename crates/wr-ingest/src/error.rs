//! Ingestion error type.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum IngestError {
    #[error("malformed coordinate {input:?}: {reason}")]
    MalformedCoordinate { input: String, reason: &'static str },

    #[error("line needs at least 2 valid coordinates, found {found}")]
    TooFewCoordinates { found: usize },
}

pub type IngestResult<T> = Result<T, IngestError>;
