//! # Deedchain Testkit
//!
//! Testing utilities for the deedchain ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: pre-wired chains with a secret and append helpers
//! - **Tamper helpers**: rebuild a chain with one block mutated, for
//!   exercising the validator
//! - **Generators**: proptest strategies for records and chains
//!
//! ## Fixtures
//!
//! ```rust
//! use deedchain_testkit::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! fixture.register("P1", "Alice", Some("plot 4"));
//! fixture.transfer("P1", "Bob", None);
//! assert_eq!(fixture.chain.len(), 2);
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use deedchain_testkit::generators::chain_strategy;
//!
//! proptest! {
//!     #[test]
//!     fn chains_stay_linked(chain in chain_strategy(8)) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{tampered, TestFixture};
pub use generators::{action_strategy, chain_strategy, record_strategy};
