//! Error types for the Ledger facade.

use deedchain_codec::CodecError;
use deedchain_core::IntegrityViolation;
use thiserror::Error;

/// Errors that can occur during Ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// An integrity violation found by validation.
    #[error("integrity violation: {0}")]
    Integrity(#[from] IntegrityViolation),

    /// An export/import codec error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Result type for Ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
