//! Canonical byte encoding for digest and signature input.
//!
//! The chaining digest commits to every hash-relevant field of a block.
//! Digest input layout (bytes, in order):
//!
//! 1. `property_id` as UTF-8 bytes
//! 2. `owner` as UTF-8 bytes
//! 3. `description` as UTF-8 bytes (empty string when absent)
//! 4. `remarks` as UTF-8 bytes (empty string when absent)
//! 5. `action` string form (`"Register"` / `"Transfer"`)
//! 6. `timestamp` as UTF-8 bytes
//! 7. `previous_digest` as UTF-8 bytes
//!
//! The encoding is deterministic: two blocks that are field-wise equal
//! after empty-string substitution of absent optionals encode to the
//! same bytes on every platform. The signature does NOT enter the
//! digest input; it is computed over its own `|`-joined message.

use crate::block::{Action, Block};
use crate::digest::sha256_hex;

/// Encode a block's hash-relevant fields to canonical bytes.
pub fn canonical_bytes(block: &Block) -> Vec<u8> {
    let description = block.description.as_deref().unwrap_or("");
    let remarks = block.remarks.as_deref().unwrap_or("");
    let action = block.action.as_str();

    let mut buf = Vec::with_capacity(
        block.property_id.len()
            + block.owner.len()
            + description.len()
            + remarks.len()
            + action.len()
            + block.timestamp.len()
            + block.previous_digest.len(),
    );
    buf.extend_from_slice(block.property_id.as_bytes());
    buf.extend_from_slice(block.owner.as_bytes());
    buf.extend_from_slice(description.as_bytes());
    buf.extend_from_slice(remarks.as_bytes());
    buf.extend_from_slice(action.as_bytes());
    buf.extend_from_slice(block.timestamp.as_bytes());
    buf.extend_from_slice(block.previous_digest.as_bytes());
    buf
}

/// Compute a block's chaining digest from its stored fields.
pub fn block_digest(block: &Block) -> String {
    sha256_hex(&canonical_bytes(block))
}

/// Construct the signing message: `propertyID|owner|action|timestamp|secret`.
pub fn signing_message(
    property_id: &str,
    owner: &str,
    action: Action,
    timestamp: &str,
    secret: &str,
) -> String {
    format!("{property_id}|{owner}|{action}|{timestamp}|{secret}")
}

/// Compute a block's keyed signature from its stored fields and `secret`.
///
/// This is a symmetric keyed hash, not a public-key signature: anyone
/// who knows the secret can produce a matching value.
pub fn block_signature(block: &Block, secret: &str) -> String {
    let message = signing_message(
        &block.property_id,
        &block.owner,
        block.action,
        &block.timestamp,
        secret,
    );
    sha256_hex(message.as_bytes())
}
