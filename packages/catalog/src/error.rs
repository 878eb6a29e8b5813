//! Error types for catalog construction

use thiserror::Error;

/// A definition set that cannot back an editor.
///
/// These are build-time defects in catalog data, never produced by editing.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Definition {id} has no default props")]
    EmptyDefaultProps { id: String },

    #[error("Definition {id} is missing required field: {field}")]
    MissingField { id: String, field: &'static str },

    #[error("Duplicate definition id: {0}")]
    DuplicateId(String),

    #[error("Duplicate block type: {0}")]
    DuplicateType(String),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
