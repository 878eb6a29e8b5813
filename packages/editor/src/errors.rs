//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Command error: {0}")]
    Command(#[from] crate::mutations::CommandError),

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Generation error: {0}")]
    Generate(#[from] crate::generate::GenerateError),

    #[error("Document error: {0}")]
    Document(#[from] pagewright_document::DocumentError),

    #[error("Block not found: {0}")]
    BlockNotFound(String),
}
