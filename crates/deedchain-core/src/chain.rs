//! Chain: an ordered, append-only sequence of blocks.
//!
//! The chain owns block creation: it stamps the timestamp, links each
//! new block to the current tail, and computes signature and digest.
//! The only mutations are [`Chain::append`] and the wholesale
//! [`Chain::install`] used by import.

use std::collections::HashSet;

use chrono::{SecondsFormat, Utc};

use crate::block::{Block, Record};
use crate::canonical::{block_digest, block_signature};
use crate::digest::GENESIS_DIGEST;

/// An append-only sequence of property-event blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    blocks: Vec<Block>,
}

/// Aggregate statistics over a chain.
///
/// Pure projections recomputed on demand; never cached state that could
/// go stale relative to the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainStats {
    /// Count of distinct property IDs with at least one Register block.
    pub registered: usize,
    /// Count of Transfer blocks.
    pub transfers: usize,
    /// Count of distinct owners across all blocks.
    pub unique_owners: usize,
}

impl Chain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Number of blocks in the chain.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the chain has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks in append order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The most recently appended block.
    pub fn tail(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Append a new block built from `record`, signed under `secret`.
    ///
    /// Stamps the current instant, links to the tail (or the `"0"`
    /// sentinel for the first block), computes the keyed signature and
    /// then the chaining digest, and pushes. Total over well-formed
    /// input: empty or malformed record fields are a caller-policy
    /// concern, not rejected here.
    ///
    /// Callers holding shared access must serialize calls: the
    /// read-tail-then-push sequence is not atomic on its own.
    pub fn append(&mut self, record: Record, secret: &str) -> &Block {
        let previous_digest = self
            .blocks
            .last()
            .map(|b| b.current_digest.clone())
            .unwrap_or_else(|| GENESIS_DIGEST.to_string());

        let mut block = Block {
            property_id: record.property_id,
            owner: record.owner,
            description: record.description,
            remarks: record.remarks,
            action: record.action,
            timestamp: now_rfc3339(),
            previous_digest,
            current_digest: String::new(),
            signature: String::new(),
        };
        block.signature = block_signature(&block, secret);
        block.current_digest = block_digest(&block);

        self.blocks.push(block);
        self.blocks.last().expect("chain cannot be empty after push")
    }

    /// The most recent block for `property_id`, if any.
    pub fn find_latest(&self, property_id: &str) -> Option<&Block> {
        self.blocks
            .iter()
            .rev()
            .find(|b| b.property_id == property_id)
    }

    /// All blocks for `property_id` in append order: the action timeline.
    ///
    /// An unknown ID yields an empty sequence.
    pub fn blocks_for(&self, property_id: &str) -> Vec<&Block> {
        self.blocks
            .iter()
            .filter(|b| b.property_id == property_id)
            .collect()
    }

    /// True iff any block with `property_id` is a registration.
    pub fn is_registered(&self, property_id: &str) -> bool {
        self.blocks
            .iter()
            .any(|b| b.is_register() && b.property_id == property_id)
    }

    /// Recompute aggregate statistics over the whole chain.
    pub fn stats(&self) -> ChainStats {
        let mut registered = HashSet::new();
        let mut owners = HashSet::new();
        let mut transfers = 0;

        for block in &self.blocks {
            owners.insert(block.owner.as_str());
            if block.is_register() {
                registered.insert(block.property_id.as_str());
            } else {
                transfers += 1;
            }
        }

        ChainStats {
            registered: registered.len(),
            transfers,
            unique_owners: owners.len(),
        }
    }

    /// Discard the current sequence and install `blocks` wholesale.
    ///
    /// Used by import. No per-block revalidation happens here; validity
    /// must be re-checked explicitly via the validator afterwards.
    pub fn install(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
    }
}

/// Current instant as an ISO-8601 string with millisecond precision.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Action;

    #[test]
    fn first_block_links_to_the_sentinel() {
        let mut chain = Chain::new();
        let block = chain.append(Record::register("P1", "Alice", None), "s1");
        assert_eq!(block.previous_digest, GENESIS_DIGEST);
        assert!(block.is_genesis());
    }

    #[test]
    fn append_links_each_block_to_the_tail() {
        let mut chain = Chain::new();
        chain.append(Record::register("P1", "Alice", None), "s1");
        chain.append(Record::transfer("P1", "Bob", None), "s1");
        chain.append(Record::register("P2", "Carol", None), "s1");

        let blocks = chain.blocks();
        assert_eq!(blocks.len(), 3);
        for i in 1..blocks.len() {
            assert_eq!(blocks[i].previous_digest, blocks[i - 1].current_digest);
        }
    }

    #[test]
    fn appended_blocks_carry_consistent_digest_and_signature() {
        let mut chain = Chain::new();
        let block = chain
            .append(Record::register("P1", "Alice", Some("plot 4".into())), "s1")
            .clone();
        assert_eq!(block.current_digest, block_digest(&block));
        assert_eq!(block.signature, block_signature(&block, "s1"));
    }

    #[test]
    fn find_latest_returns_the_most_recent_block() {
        let mut chain = Chain::new();
        chain.append(Record::register("P1", "Alice", None), "s1");
        chain.append(Record::transfer("P1", "Bob", None), "s1");

        let latest = chain.find_latest("P1").unwrap();
        assert_eq!(latest.owner, "Bob");
        assert_eq!(latest.action, Action::Transfer);
        assert!(chain.find_latest("P9").is_none());
    }

    #[test]
    fn blocks_for_filters_in_append_order() {
        let mut chain = Chain::new();
        chain.append(Record::register("P1", "Alice", None), "s1");
        chain.append(Record::register("P2", "Carol", None), "s1");
        chain.append(Record::transfer("P1", "Bob", None), "s1");

        let timeline = chain.blocks_for("P1");
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].owner, "Alice");
        assert_eq!(timeline[1].owner, "Bob");

        assert!(chain.blocks_for("unknown").is_empty());
    }

    #[test]
    fn is_registered_requires_a_register_block() {
        let mut chain = Chain::new();
        // A transfer alone does not register the property.
        chain.append(Record::transfer("P1", "Bob", None), "s1");
        assert!(!chain.is_registered("P1"));

        chain.append(Record::register("P1", "Alice", None), "s1");
        assert!(chain.is_registered("P1"));
    }

    #[test]
    fn stats_are_recomputed_projections() {
        let mut chain = Chain::new();
        assert_eq!(
            chain.stats(),
            ChainStats {
                registered: 0,
                transfers: 0,
                unique_owners: 0
            }
        );

        chain.append(Record::register("P1", "Alice", None), "s1");
        chain.append(Record::transfer("P1", "Bob", None), "s1");
        chain.append(Record::register("P2", "Alice", None), "s1");
        // Duplicate registration of P2: counted once as a distinct ID.
        chain.append(Record::register("P2", "Dan", None), "s1");

        assert_eq!(
            chain.stats(),
            ChainStats {
                registered: 2,
                transfers: 1,
                unique_owners: 3
            }
        );
    }

    #[test]
    fn install_replaces_the_sequence_wholesale() {
        let mut chain = Chain::new();
        chain.append(Record::register("P1", "Alice", None), "s1");

        let mut other = Chain::new();
        other.append(Record::register("P9", "Zed", None), "s2");
        other.append(Record::transfer("P9", "Ann", None), "s2");

        chain.install(other.blocks().to_vec());
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.blocks()[0].property_id, "P9");
    }
}
