//! Block: the atomic unit of the property ledger.
//!
//! A block is an immutable event. Once appended, it is never edited or
//! removed; ownership changes are represented as new blocks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of property event a block records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// First appearance of a property on the ledger.
    Register,
    /// Ownership handover of a previously registered property.
    Transfer,
}

impl Action {
    /// The string form used in signatures and the export format.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Register => "Register",
            Action::Transfer => "Transfer",
        }
    }

    /// Try to parse from the string form.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "Register" => Some(Action::Register),
            "Transfer" => Some(Action::Transfer),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller-supplied payload of a property event.
///
/// A record carries only the fields specific to the action; the chain
/// adds timestamp, linkage, digest and signature at append time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier of the property this event concerns.
    pub property_id: String,

    /// The owner named by this event (the new owner for a transfer).
    pub owner: String,

    /// The kind of event.
    pub action: Action,

    /// Free-form description (present for registrations).
    pub description: Option<String>,

    /// Free-form remarks (present for transfers).
    pub remarks: Option<String>,
}

impl Record {
    /// Build a registration record.
    pub fn register(
        property_id: impl Into<String>,
        owner: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            owner: owner.into(),
            action: Action::Register,
            description,
            remarks: None,
        }
    }

    /// Build a transfer record naming the new owner.
    pub fn transfer(
        property_id: impl Into<String>,
        new_owner: impl Into<String>,
        remarks: Option<String>,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            owner: new_owner.into(),
            action: Action::Transfer,
            description: None,
            remarks,
        }
    }
}

/// A complete ledger entry: record fields plus chain metadata.
///
/// External field names (`propertyID`, `previousHash`, `currentHash`) are
/// fixed for export compatibility and must not change. Field order here
/// is the export field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Identifier of the property this event concerns.
    #[serde(rename = "propertyID", default)]
    pub property_id: String,

    /// The owner named by this event.
    #[serde(default)]
    pub owner: String,

    /// Free-form description (registrations).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form remarks (transfers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// The kind of event.
    pub action: Action,

    /// ISO-8601 creation instant, stamped by the chain at append time.
    #[serde(default)]
    pub timestamp: String,

    /// Digest of the prior block, or `"0"` for the first block.
    #[serde(rename = "previousHash", default)]
    pub previous_digest: String,

    /// SHA-256 hex digest over this block's canonical encoding.
    #[serde(rename = "currentHash", default)]
    pub current_digest: String,

    /// Keyed digest binding this block to the author's secret.
    #[serde(default)]
    pub signature: String,
}

impl Block {
    /// Check if this block registers a property.
    pub fn is_register(&self) -> bool {
        self.action == Action::Register
    }

    /// Check if this block transfers a property.
    pub fn is_transfer(&self) -> bool {
        self.action == Action::Transfer
    }

    /// Check if this is the first block of a chain.
    pub fn is_genesis(&self) -> bool {
        self.previous_digest == crate::digest::GENESIS_DIGEST
    }
}
