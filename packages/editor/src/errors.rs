//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Share payload could not be decompressed")]
    Decompress,

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),
}
