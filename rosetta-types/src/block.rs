use serde::{Deserialize, Serialize};

use crate::identifiers::{BlockIdentifier, TransactionIdentifier};
use crate::operation::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_identifier: Option<TransactionIdentifier>,
    pub operations: Vec<Operation>,
}

impl Transaction {
    pub fn new(hash: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            transaction_identifier: Some(TransactionIdentifier::new(hash)),
            operations,
        }
    }
}

/// A block as reported by a provider. `timestamp` is in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_identifier: Option<BlockIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_block_identifier: Option<BlockIdentifier>,
    pub timestamp: i64,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(
        block_identifier: BlockIdentifier,
        parent_block_identifier: BlockIdentifier,
        timestamp: i64,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            block_identifier: Some(block_identifier),
            parent_block_identifier: Some(parent_block_identifier),
            timestamp,
            transactions,
        }
    }
}
