//! The Ledger: caller-facing handle over a single chain.
//!
//! All mutations go through one `tokio::sync::Mutex`, making the
//! read-tail-then-push sequence of an append a single critical section.
//! The design assumes a single logical mutator; the lock is what keeps
//! that true when the handle is shared.

use tokio::sync::Mutex;

use deedchain_core::{
    validate_chain, Block, Chain, ChainStats, ChainStatus, Record,
};

use crate::error::Result;

/// A handle over one property-event chain.
///
/// The Ledger exposes the chain primitives and nothing more: it does
/// not enforce registration-uniqueness or non-empty-field policy.
/// Those belong to the calling layer, which can use
/// [`Ledger::is_registered`] to implement them.
pub struct Ledger {
    chain: Mutex<Chain>,
}

impl Ledger {
    /// Create a ledger over an empty chain.
    pub fn new() -> Self {
        Self {
            chain: Mutex::new(Chain::new()),
        }
    }

    /// Create a ledger over an existing chain.
    pub fn with_chain(chain: Chain) -> Self {
        Self {
            chain: Mutex::new(chain),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Append Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Record the registration of a property and return the new block.
    pub async fn register(
        &self,
        property_id: &str,
        owner: &str,
        description: Option<String>,
        secret: &str,
    ) -> Block {
        self.append(Record::register(property_id, owner, description), secret)
            .await
    }

    /// Record an ownership transfer and return the new block.
    pub async fn transfer(
        &self,
        property_id: &str,
        new_owner: &str,
        remarks: Option<String>,
        secret: &str,
    ) -> Block {
        self.append(Record::transfer(property_id, new_owner, remarks), secret)
            .await
    }

    async fn append(&self, record: Record, secret: &str) -> Block {
        let mut chain = self.chain.lock().await;
        chain.append(record, secret).clone()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// The full action timeline for a property, in append order.
    pub async fn timeline(&self, property_id: &str) -> Vec<Block> {
        let chain = self.chain.lock().await;
        chain
            .blocks_for(property_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The most recent block for a property, if any.
    pub async fn latest(&self, property_id: &str) -> Option<Block> {
        let chain = self.chain.lock().await;
        chain.find_latest(property_id).cloned()
    }

    /// True iff the property has at least one registration block.
    pub async fn is_registered(&self, property_id: &str) -> bool {
        self.chain.lock().await.is_registered(property_id)
    }

    /// Aggregate statistics, recomputed from the chain on every call.
    pub async fn stats(&self) -> ChainStats {
        self.chain.lock().await.stats()
    }

    /// Number of blocks currently in the chain.
    pub async fn len(&self) -> usize {
        self.chain.lock().await.len()
    }

    /// Check if the chain has no blocks.
    pub async fn is_empty(&self) -> bool {
        self.chain.lock().await.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Replay the whole chain under `secret`.
    ///
    /// A failed validation is terminal for that run but not for the
    /// ledger: the chain stays usable and appendable afterwards.
    pub async fn validate(&self, secret: &str) -> Result<ChainStatus> {
        let chain = self.chain.lock().await;
        Ok(validate_chain(&chain, secret)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Export / Import
    // ─────────────────────────────────────────────────────────────────────────

    /// Serialize the full chain to its external JSON representation.
    pub async fn export(&self) -> Result<String> {
        let chain = self.chain.lock().await;
        Ok(deedchain_codec::to_json(chain.blocks())?)
    }

    /// Replace the chain with one decoded from `bytes`.
    ///
    /// Deserialize-then-install: a failed parse returns the error and
    /// leaves the current chain untouched. No integrity checks happen
    /// at load time; call [`Ledger::validate`] afterwards. Returns the
    /// number of installed blocks.
    pub async fn import(&self, bytes: &[u8]) -> Result<usize> {
        let blocks = deedchain_codec::from_json(bytes)?;
        let count = blocks.len();

        let mut chain = self.chain.lock().await;
        if !chain.is_empty() {
            tracing::warn!(
                replaced = chain.len(),
                installed = count,
                "import discarded the previous chain"
            );
        }
        chain.install(blocks);
        Ok(count)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
