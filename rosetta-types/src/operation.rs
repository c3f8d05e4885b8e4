use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::identifiers::{AccountIdentifier, OperationIdentifier};

/// A single state change inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_identifier: Option<OperationIdentifier>,
    pub r#type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl Operation {
    pub fn new(index: i64, r#type: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            operation_identifier: Some(OperationIdentifier::new(index)),
            r#type: r#type.into(),
            status: status.into(),
            account: None,
            amount: None,
        }
    }

    pub fn with_transfer(mut self, account: AccountIdentifier, amount: Amount) -> Self {
        self.account = Some(account);
        self.amount = Some(amount);
        self
    }
}

/// A status tag a provider may attach to operations, and whether operations
/// carrying it were applied on chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationStatus {
    pub status: String,
    pub successful: bool,
}

impl OperationStatus {
    pub fn new(status: impl Into<String>, successful: bool) -> Self {
        Self {
            status: status.into(),
            successful,
        }
    }
}
