use thiserror::Error;

use wr_core::{EdgeId, NodeId};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("route references node {0} which is not in the graph")]
    MissingNode(NodeId),

    #[error("route references edge {0} which is not in the graph")]
    MissingEdge(EdgeId),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
