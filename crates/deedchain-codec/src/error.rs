//! Error types for the transport codec.

use thiserror::Error;

/// Errors surfaced by chain export and import.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The import payload's top-level value is not a JSON array.
    #[error("import payload must be a JSON array")]
    NotAnArray,

    /// The payload is not well-formed JSON, or a block element has a
    /// field of the wrong type.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}
