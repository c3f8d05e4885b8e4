use crate::database::DatabaseTransaction;
use crate::{Error, Result};

/// Stage `value` under `key` unless the key already exists, as seen by
/// `transaction`.
///
/// The write is staged with [`DatabaseTransaction::insert`], so a
/// concurrent transaction committing the same key first makes this
/// transaction's commit fail instead of overwriting it.
pub async fn store_unique_key<T: DatabaseTransaction>(
    transaction: &mut T,
    key: &[u8],
    value: Vec<u8>,
) -> Result<()> {
    if transaction.get(key).await?.is_some() {
        let err = Error::duplicate_key(key);
        log::debug!("{}", err);
        return Err(err);
    }

    transaction.insert(key, value).await
}
