//! Digest primitive: SHA-256 over arbitrary bytes, hex-encoded.

use sha2::{Digest, Sha256};

/// Sentinel `previous_digest` value carried by the first block of a chain.
pub const GENESIS_DIGEST: &str = "0";

/// Compute the lowercase hex SHA-256 digest of `data`.
///
/// Total function: every input, including the empty slice, produces a
/// 64-character hex string. Same bytes in, same string out.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
