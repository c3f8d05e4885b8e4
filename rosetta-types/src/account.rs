use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::identifiers::BlockIdentifier;

/// Balances of an account as of `block_identifier`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountBalanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_identifier: Option<BlockIdentifier>,
    pub balances: Vec<Amount>,
}
