//! Error types for the document model

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid site data JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Site data must be a JSON object")]
    NotAnObject,
}

/// Failure to address a location inside a block's props
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Property path is empty")]
    EmptyPath,

    #[error("Index {index} out of bounds for {key} (length {len})")]
    IndexOutOfBounds { key: String, index: usize, len: usize },

    #[error("Property {0} is not an array")]
    NotAnArray(String),

    #[error("Cannot descend into scalar at {0}")]
    NotAContainer(String),
}
