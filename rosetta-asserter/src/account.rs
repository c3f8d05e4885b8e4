use rosetta_types::AccountBalanceResponse;

use crate::block::{amount, block_identifier};
use crate::error::Result;

pub fn account_balance_response(response: &AccountBalanceResponse) -> Result<()> {
    block_identifier(response.block_identifier.as_ref())?;
    response.balances.iter().try_for_each(|balance| amount(Some(balance)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AsserterError;
    use rosetta_types::{Amount, BlockIdentifier, Currency};

    #[test]
    fn test_account_balance_response() {
        let mut response = AccountBalanceResponse {
            block_identifier: Some(BlockIdentifier::new(5, "block 5")),
            balances: vec![Amount::new("100", Currency::new("ETH", 18))],
        };
        assert_eq!(account_balance_response(&response), Ok(()));

        response.balances.push(Amount::new("100", Currency::new("ETH", 0)));
        assert_eq!(
            account_balance_response(&response),
            Err(AsserterError::CurrencyDecimalsInvalid(0))
        );

        response.block_identifier = None;
        assert_eq!(
            account_balance_response(&response),
            Err(AsserterError::BlockIdentifierMissing)
        );
    }
}
