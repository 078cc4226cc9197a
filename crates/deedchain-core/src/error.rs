//! Error types for deedchain core.

use thiserror::Error;

/// An integrity violation found while replaying a chain.
///
/// Each variant carries the 0-based index of the first offending block.
/// The variants are mutually exclusive per validation run: the scan
/// halts at the first failure and never aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    /// The recomputed chaining digest disagrees with the stored value.
    #[error("digest mismatch at block {index}")]
    HashMismatch { index: usize },

    /// The stored previous-digest disagrees with the predecessor's
    /// stored digest.
    #[error("broken chain link at block {index}")]
    BrokenLink { index: usize },

    /// The signature recomputed under the supplied secret disagrees
    /// with the stored signature.
    #[error("signature mismatch at block {index}")]
    SignatureInvalid { index: usize },
}

impl IntegrityViolation {
    /// The index of the offending block.
    pub fn index(&self) -> usize {
        match self {
            IntegrityViolation::HashMismatch { index }
            | IntegrityViolation::BrokenLink { index }
            | IntegrityViolation::SignatureInvalid { index } => *index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_reports_its_index() {
        assert_eq!(IntegrityViolation::HashMismatch { index: 3 }.index(), 3);
        assert_eq!(IntegrityViolation::BrokenLink { index: 1 }.index(), 1);
        assert_eq!(
            IntegrityViolation::SignatureInvalid { index: 0 }.index(),
            0
        );
    }

    #[test]
    fn violation_messages_name_the_block() {
        let v = IntegrityViolation::BrokenLink { index: 2 };
        assert_eq!(v.to_string(), "broken chain link at block 2");
    }
}
