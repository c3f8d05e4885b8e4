//! Checks for blocks, transactions, operations and the primitives they are
//! made of.
//!
//! Every check returns the first violation it finds. The order in which
//! fields are inspected is fixed so that a given malformed object always
//! yields the same error.

use num_bigint::BigInt;
use rosetta_types::{
    AccountIdentifier, Amount, Block, BlockIdentifier, Operation, OperationIdentifier,
    PartialBlockIdentifier, Transaction, TransactionIdentifier,
};

use crate::asserter::Asserter;
use crate::error::{AsserterError, Result};

/// Parse the value of an [`Amount`] as a signed base-10 integer.
///
/// Only an optional sign followed by ASCII digits is accepted.
pub fn amount_value(amount: &Amount) -> Result<BigInt> {
    let value = amount.value.as_str();
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AsserterError::AmountValueNotInteger(value.to_string()));
    }

    BigInt::parse_bytes(value.as_bytes(), 10)
        .ok_or_else(|| AsserterError::AmountValueNotInteger(value.to_string()))
}

/// Ensures an amount has an integer value, a currency symbol and a positive
/// number of decimals.
pub fn amount(amount: Option<&Amount>) -> Result<()> {
    let amount = match amount {
        Some(amount) if !amount.value.is_empty() => amount,
        _ => return Err(AsserterError::AmountValueMissing),
    };

    amount_value(amount)?;

    let currency = amount.currency.as_ref().ok_or(AsserterError::AmountCurrencyMissing)?;

    if currency.symbol.is_empty() {
        return Err(AsserterError::CurrencySymbolMissing);
    }

    if currency.decimals <= 0 {
        return Err(AsserterError::CurrencyDecimalsInvalid(currency.decimals));
    }

    Ok(())
}

/// Ensures an operation sits at `index` in its transaction and that a
/// provided network index is not negative.
pub fn operation_identifier(identifier: Option<&OperationIdentifier>, index: i64) -> Result<()> {
    let identifier = identifier.ok_or(AsserterError::OperationIdentifierMissing)?;

    if identifier.index != index {
        return Err(AsserterError::OperationIndexMismatch {
            expected: index,
            found: identifier.index,
        });
    }

    match identifier.network_index {
        Some(network_index) if network_index < 0 => {
            Err(AsserterError::NetworkIndexInvalid(network_index))
        }
        _ => Ok(()),
    }
}

pub fn account_identifier(account: Option<&AccountIdentifier>) -> Result<()> {
    let account = account.ok_or(AsserterError::AccountMissing)?;

    if account.address.is_empty() {
        return Err(AsserterError::AccountAddressMissing);
    }

    match &account.sub_account {
        Some(sub_account) if sub_account.address.is_empty() => {
            Err(AsserterError::SubAccountAddressMissing)
        }
        _ => Ok(()),
    }
}

pub fn block_identifier(identifier: Option<&BlockIdentifier>) -> Result<()> {
    let identifier = identifier.ok_or(AsserterError::BlockIdentifierMissing)?;

    if identifier.hash.is_empty() {
        return Err(AsserterError::BlockIdentifierHashMissing);
    }

    if identifier.index < 0 {
        return Err(AsserterError::BlockIdentifierIndexNegative(identifier.index));
    }

    Ok(())
}

/// A partial identifier is usable when it carries a non-empty hash or a
/// non-negative index.
pub fn partial_block_identifier(identifier: Option<&PartialBlockIdentifier>) -> Result<()> {
    let identifier = identifier.ok_or(AsserterError::PartialBlockIdentifierMissing)?;

    if identifier.hash.as_deref().is_some_and(|hash| !hash.is_empty()) {
        return Ok(());
    }

    if identifier.index.is_some_and(|index| index >= 0) {
        return Ok(());
    }

    Err(AsserterError::PartialBlockIdentifierUnset)
}

pub fn transaction_identifier(identifier: Option<&TransactionIdentifier>) -> Result<()> {
    let identifier = identifier.ok_or(AsserterError::TransactionIdentifierMissing)?;

    if identifier.hash.is_empty() {
        return Err(AsserterError::TransactionIdentifierHashMissing);
    }

    Ok(())
}

/// Block timestamps are epoch milliseconds and must be strictly positive.
pub fn timestamp(timestamp: i64) -> Result<()> {
    if timestamp <= 0 {
        return Err(AsserterError::TimestampInvalid(timestamp));
    }

    Ok(())
}

impl Asserter {
    /// Whether an operation was applied on chain, according to the success
    /// flag declared for its status.
    ///
    /// Only call this on an operation that already passed
    /// [`Asserter::operation`]; the operation itself is not re-checked.
    pub fn operation_successful(&self, operation: &Operation) -> Result<bool> {
        self.operation_status_map
            .get(&operation.status)
            .copied()
            .ok_or_else(|| AsserterError::OperationStatusUnrecognized(operation.status.clone()))
    }

    /// Ensures an operation sits at `index`, has a declared type and status
    /// and, when it moves value, a valid account and amount.
    ///
    /// An operation without an amount needs no account.
    pub fn operation(&self, operation: &Operation, index: i64) -> Result<()> {
        operation_identifier(operation.operation_identifier.as_ref(), index)?;

        if operation.r#type.is_empty() {
            return Err(AsserterError::OperationTypeMissing);
        }
        if !self.operation_types.contains(&operation.r#type) {
            return Err(AsserterError::OperationTypeNotAllowed(operation.r#type.clone()));
        }

        if operation.status.is_empty() {
            return Err(AsserterError::OperationStatusMissing);
        }
        if !self.operation_status_map.contains_key(&operation.status) {
            return Err(AsserterError::OperationStatusNotAllowed(operation.status.clone()));
        }

        if operation.amount.is_none() {
            return Ok(());
        }

        account_identifier(operation.account.as_ref())?;
        amount(operation.amount.as_ref())
    }

    /// Ensures a transaction is identified and that its operations are valid
    /// and indexed densely from zero in sequence order.
    pub fn transaction(&self, transaction: &Transaction) -> Result<()> {
        transaction_identifier(transaction.transaction_identifier.as_ref())?;

        for (index, operation) in (0i64..).zip(transaction.operations.iter()) {
            self.operation(operation, index)?;
        }

        Ok(())
    }

    /// Runs the block checks: identifiers, ancestry, timestamp, then every
    /// transaction in order.
    pub fn block(&self, block: &Block) -> Result<()> {
        let current = block.block_identifier.as_ref();
        let parent = block.parent_block_identifier.as_ref();
        block_identifier(current)?;
        block_identifier(parent)?;

        let (current, parent) = match (current, parent) {
            (Some(current), Some(parent)) => (current, parent),
            _ => return Err(AsserterError::BlockIdentifierMissing),
        };

        // The genesis block has no real parent, so it may point at itself.
        let is_genesis = current.index == self.genesis_block.index;
        if !is_genesis {
            if current.hash == parent.hash {
                return Err(AsserterError::BlockHashSelfReferential);
            }

            if current.index <= parent.index {
                return Err(AsserterError::BlockIndexNotIncreasing);
            }
        }

        timestamp(block.timestamp)?;

        for transaction in &block.transactions {
            self.transaction(transaction)?;
        }

        Ok(())
    }
}
