//! # Deedchain Core
//!
//! Pure primitives for the deedchain ledger: blocks, chains, and
//! canonical encoding.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over hash-chained data structures.
//!
//! ## Key Types
//!
//! - [`Block`] - One ledger entry: a property action plus chain linkage
//! - [`Record`] - The caller-supplied action payload
//! - [`Chain`] - An ordered, append-only sequence of blocks
//! - [`Action`] - Discriminator for the kind of property event
//!
//! ## Canonicalization
//!
//! Every block digest is computed over a deterministic, field-order-fixed
//! byte encoding. See [`canonical`] module.

pub mod block;
pub mod canonical;
pub mod chain;
pub mod digest;
pub mod error;
pub mod validation;

pub use block::{Action, Block, Record};
pub use canonical::{block_digest, block_signature, canonical_bytes};
pub use chain::{Chain, ChainStats};
pub use digest::{sha256_hex, GENESIS_DIGEST};
pub use error::IntegrityViolation;
pub use validation::{validate_chain, ChainStatus};
