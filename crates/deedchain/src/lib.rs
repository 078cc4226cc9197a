//! # Deedchain
//!
//! The unified API for the deedchain system — a tamper-evident,
//! append-only ledger of property-ownership events.
//!
//! ## Overview
//!
//! - **Blocks**: Immutable, signed events. Once appended, never edited;
//!   ownership changes are new blocks.
//! - **Chain linkage**: Each block stores the digest of its
//!   predecessor; the first block links to the `"0"` sentinel.
//! - **Signatures**: A keyed SHA-256 digest binding a block to the
//!   secret of whoever appended it. Symmetric by design: anyone who
//!   knows the secret can produce a matching value.
//! - **Validation**: A full replay recomputing every digest and
//!   signature, reporting the first violation found.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deedchain::Ledger;
//!
//! async fn example() {
//!     let ledger = Ledger::new();
//!
//!     ledger
//!         .register("P1", "Alice", Some("plot 4, north side".into()), "s1")
//!         .await;
//!     ledger.transfer("P1", "Bob", Some("sale".into()), "s1").await;
//!
//!     let status = ledger.validate("s1").await.unwrap();
//!     let exported = ledger.export().await.unwrap();
//!     let _ = (status, exported);
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `deedchain::core` - Core primitives (Block, Chain, validator)
//! - `deedchain::codec` - JSON export/import

pub mod error;
pub mod ledger;

// Re-export component crates
pub use deedchain_codec as codec;
pub use deedchain_core as core;

// Re-export main types for convenience
pub use error::{LedgerError, Result};
pub use ledger::Ledger;

// Re-export commonly used core types
pub use deedchain_core::{
    Action, Block, Chain, ChainStats, ChainStatus, IntegrityViolation, Record, GENESIS_DIGEST,
};
