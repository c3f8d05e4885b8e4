use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::{Database, DatabaseTransaction, Staged};
use crate::{Error, Result};

type Entries = BTreeMap<Vec<u8>, Vec<u8>>;

/// In-process store, mainly for tests and short-lived tooling.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    entries: Arc<RwLock<Entries>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Database for MemoryDatabase {
    type Transaction = MemoryTransaction;

    fn transaction(&self) -> MemoryTransaction {
        MemoryTransaction {
            entries: Arc::clone(&self.entries),
            staged: BTreeMap::new(),
        }
    }
}

#[derive(Debug)]
pub struct MemoryTransaction {
    entries: Arc<RwLock<Entries>>,
    staged: BTreeMap<Vec<u8>, Staged>,
}

#[async_trait]
impl DatabaseTransaction for MemoryTransaction {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        if let Some(staged) = self.staged.get(key) {
            return Ok(staged.value().cloned());
        }

        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<()> {
        self.staged.insert(key.to_vec(), Staged::Put(value));
        Ok(())
    }

    async fn insert(&mut self, key: &[u8], value: Vec<u8>) -> Result<()> {
        self.staged.insert(key.to_vec(), Staged::Insert(value));
        Ok(())
    }

    async fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.staged.insert(key.to_vec(), Staged::Delete);
        Ok(())
    }

    async fn commit(self) -> Result<()> {
        // the write lock covers both the recheck and the apply
        let mut entries = self.entries.write().await;

        for (key, staged) in &self.staged {
            if matches!(staged, Staged::Insert(_)) && entries.contains_key(key) {
                let err = Error::duplicate_key(key);
                log::debug!("commit rejected: {}", err);
                return Err(err);
            }
        }

        log::debug!("committing {} staged writes to memory database", self.staged.len());
        for (key, staged) in self.staged {
            match staged {
                Staged::Put(value) | Staged::Insert(value) => {
                    entries.insert(key, value);
                }
                Staged::Delete => {
                    entries.remove(&key);
                }
            }
        }

        Ok(())
    }

    async fn discard(self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_staged_writes_are_isolated_until_commit() {
        let db = MemoryDatabase::new();

        let mut writer = db.transaction();
        writer.set(b"block/1", b"one".to_vec()).await.unwrap();
        assert_eq!(writer.get(b"block/1").await.unwrap(), Some(b"one".to_vec()));

        let reader = db.transaction();
        assert_eq!(reader.get(b"block/1").await.unwrap(), None);

        writer.commit().await.unwrap();
        assert_eq!(reader.get(b"block/1").await.unwrap(), Some(b"one".to_vec()));
        assert_eq!(db.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_and_discard() {
        let db = MemoryDatabase::new();

        let mut txn = db.transaction();
        txn.set(b"a", b"1".to_vec()).await.unwrap();
        txn.commit().await.unwrap();

        let mut txn = db.transaction();
        txn.delete(b"a").await.unwrap();
        assert_eq!(txn.get(b"a").await.unwrap(), None);
        txn.discard().await.unwrap();
        assert_eq!(db.len().await, 1);

        let mut txn = db.transaction();
        txn.delete(b"a").await.unwrap();
        txn.commit().await.unwrap();
        assert!(db.is_empty().await);
    }

    #[tokio::test]
    async fn test_insert_fails_commit_when_key_committed_meanwhile() {
        let db = MemoryDatabase::new();

        let mut first = db.transaction();
        let mut second = db.transaction();
        first.insert(b"k", b"1".to_vec()).await.unwrap();
        second.insert(b"k", b"2".to_vec()).await.unwrap();
        second.set(b"other", b"x".to_vec()).await.unwrap();

        first.commit().await.unwrap();
        assert!(second.commit().await.unwrap_err().is_duplicate_key());

        // the rejected commit applied none of its writes
        let reader = db.transaction();
        assert_eq!(reader.get(b"k").await.unwrap(), Some(b"1".to_vec()));
        assert_eq!(reader.get(b"other").await.unwrap(), None);
    }
}
