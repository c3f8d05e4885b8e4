use serde::{Deserialize, Serialize};

/// Canonical reference to a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockIdentifier {
    pub index: i64,
    pub hash: String,
}

impl BlockIdentifier {
    pub fn new(index: i64, hash: impl Into<String>) -> Self {
        Self {
            index,
            hash: hash.into(),
        }
    }
}

/// Lookup reference to a block, by hash, by index or both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialBlockIdentifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl PartialBlockIdentifier {
    pub fn by_index(index: i64) -> Self {
        Self {
            index: Some(index),
            hash: None,
        }
    }

    pub fn by_hash(hash: impl Into<String>) -> Self {
        Self {
            index: None,
            hash: Some(hash.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionIdentifier {
    pub hash: String,
}

impl TransactionIdentifier {
    pub fn new(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }
}

/// Position of an operation inside its transaction.
///
/// `network_index` is the provider's own index for the operation, when the
/// underlying chain has one (for example an output index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationIdentifier {
    pub index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_index: Option<i64>,
}

impl OperationIdentifier {
    pub fn new(index: i64) -> Self {
        Self {
            index,
            network_index: None,
        }
    }

    pub fn with_network_index(mut self, network_index: i64) -> Self {
        self.network_index = Some(network_index);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubAccountIdentifier {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountIdentifier {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_account: Option<SubAccountIdentifier>,
}

impl AccountIdentifier {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            sub_account: None,
        }
    }

    pub fn with_sub_account(mut self, address: impl Into<String>) -> Self {
        self.sub_account = Some(SubAccountIdentifier {
            address: address.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubNetworkIdentifier {
    pub network: String,
}

/// Identifies the chain and network (mainnet, testnet, ...) a provider serves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkIdentifier {
    pub blockchain: String,
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_network_identifier: Option<SubNetworkIdentifier>,
}
