use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub symbol: String,
    pub decimals: i32,
}

impl Currency {
    pub fn new(symbol: impl Into<String>, decimals: i32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }
}

/// A quantity of some currency.
///
/// `value` is the integer amount in the currency's smallest unit, encoded as
/// a base-10 string so it is not bounded by any machine integer width.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Amount {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl Amount {
    pub fn new(value: impl Into<String>, currency: Currency) -> Self {
        Self {
            value: value.into(),
            currency: Some(currency),
        }
    }
}
