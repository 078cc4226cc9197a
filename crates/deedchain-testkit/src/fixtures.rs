//! Test fixtures and helpers.
//!
//! Common setup code for unit and integration tests.

use deedchain_core::{Block, Chain, Record};

/// A test fixture with a chain and the secret used to sign it.
pub struct TestFixture {
    pub secret: String,
    pub chain: Chain,
}

impl TestFixture {
    /// Create a new fixture with the default secret.
    pub fn new() -> Self {
        Self::with_secret("fixture-secret")
    }

    /// Create a fixture signing under `secret`.
    pub fn with_secret(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
            chain: Chain::new(),
        }
    }

    /// Append a registration block and return a copy of it.
    pub fn register(
        &mut self,
        property_id: &str,
        owner: &str,
        description: Option<&str>,
    ) -> Block {
        self.chain
            .append(
                Record::register(property_id, owner, description.map(String::from)),
                &self.secret,
            )
            .clone()
    }

    /// Append a transfer block and return a copy of it.
    pub fn transfer(&mut self, property_id: &str, new_owner: &str, remarks: Option<&str>) -> Block {
        self.chain
            .append(
                Record::transfer(property_id, new_owner, remarks.map(String::from)),
                &self.secret,
            )
            .clone()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild `chain` with the block at `index` mutated by `tamper`.
///
/// Goes through `install`, which (like import) performs no
/// revalidation, so the result carries the tampered block as-is.
pub fn tampered(chain: &Chain, index: usize, tamper: impl FnOnce(&mut Block)) -> Chain {
    let mut blocks = chain.blocks().to_vec();
    tamper(&mut blocks[index]);
    let mut out = Chain::new();
    out.install(blocks);
    out
}
