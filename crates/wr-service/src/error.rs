use thiserror::Error;

use wr_core::CoreError;
use wr_ingest::IngestError;
use wr_output::OutputError;
use wr_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error("bad query: {0}")]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
