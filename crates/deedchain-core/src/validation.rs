//! Chain validation: full replay with digest and signature recomputation.

use crate::canonical::{block_digest, block_signature};
use crate::chain::Chain;
use crate::error::IntegrityViolation;

/// Non-error outcome of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStatus {
    /// The chain has zero blocks; there was nothing to check.
    Empty,
    /// Every block passed all integrity checks.
    Valid,
}

/// Replay `chain` top to bottom, recomputing digests and signatures.
///
/// Per block, the checks run in priority order: chaining digest first
/// (it covers the whole block's content), then the link to the
/// predecessor (index > 0 only), then the keyed signature. The first
/// failure across the scan is returned; the scan never aggregates.
///
/// Single-secret model: every block is checked against the one supplied
/// secret. A chain legitimately signed under several different secrets
/// reports [`IntegrityViolation::SignatureInvalid`] at the first block
/// not signed with `secret`.
pub fn validate_chain(chain: &Chain, secret: &str) -> Result<ChainStatus, IntegrityViolation> {
    let blocks = chain.blocks();
    if blocks.is_empty() {
        return Ok(ChainStatus::Empty);
    }

    for (index, block) in blocks.iter().enumerate() {
        if block_digest(block) != block.current_digest {
            return Err(IntegrityViolation::HashMismatch { index });
        }
        if index > 0 && block.previous_digest != blocks[index - 1].current_digest {
            return Err(IntegrityViolation::BrokenLink { index });
        }
        if block_signature(block, secret) != block.signature {
            return Err(IntegrityViolation::SignatureInvalid { index });
        }
    }

    Ok(ChainStatus::Valid)
}
