use async_trait::async_trait;

use crate::Result;

/// A store that hands out transactions.
pub trait Database: Send + Sync {
    type Transaction: DatabaseTransaction;

    fn transaction(&self) -> Self::Transaction;
}

/// Reads see the transaction's own staged writes first, then committed
/// state. Nothing is visible to other transactions before `commit`.
#[async_trait]
pub trait DatabaseTransaction: Send + Sync {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    async fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<()>;

    /// Stage a write of a key that must still be absent at commit.
    ///
    /// `commit` fails with [`crate::Error::DuplicateKey`] and applies
    /// nothing if another transaction committed the key in the meantime.
    async fn insert(&mut self, key: &[u8], value: Vec<u8>) -> Result<()>;

    async fn delete(&mut self, key: &[u8]) -> Result<()>;

    async fn commit(self) -> Result<()>;

    /// Drop all staged writes.
    async fn discard(self) -> Result<()>;
}

/// A write waiting in a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Staged {
    Put(Vec<u8>),
    Insert(Vec<u8>),
    Delete,
}

impl Staged {
    pub(crate) fn value(&self) -> Option<&Vec<u8>> {
        match self {
            Staged::Put(value) | Staged::Insert(value) => Some(value),
            Staged::Delete => None,
        }
    }
}
