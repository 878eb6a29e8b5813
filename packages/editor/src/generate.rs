//! Seam for generated block content.
//!
//! Producing the content is someone else's job (a hosted model, a template
//! service). The editor only needs a partial props object back, which it
//! applies like any other props update.

use pagewright_document::Props;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Content generation unavailable: {0}")]
    Unavailable(String),

    #[error("Generated content is not a props object: {0}")]
    InvalidResponse(String),
}

pub trait ContentGenerator {
    /// Produce props for a block of `block_type` describing `business_context`
    fn generate(&self, block_type: &str, business_context: &str) -> Result<Props, GenerateError>;
}

/// Parse a generator's raw JSON reply into props
pub fn props_from_response(response: &str) -> Result<Props, GenerateError> {
    match serde_json::from_str::<serde_json::Value>(response) {
        Ok(serde_json::Value::Object(props)) => Ok(props),
        Ok(other) => Err(GenerateError::InvalidResponse(other.to_string())),
        Err(err) => Err(GenerateError::InvalidResponse(err.to_string())),
    }
}
