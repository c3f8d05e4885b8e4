use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use rocksdb::{Options, WriteBatch, DB};
use tempfile::TempDir;
use tokio::sync::Mutex;

use crate::database::{Database, DatabaseTransaction, Staged};
use crate::{Error, Result};

/// RocksDB backed store. Committing a transaction applies its staged writes
/// as a single atomic batch.
#[derive(Debug)]
pub struct RocksDatabase {
    db: Arc<DB>,
    // serializes commits so inserts are rechecked against settled state
    commit_lock: Arc<Mutex<()>>,
    path: PathBuf,
    // keeps the directory of an in-memory database alive
    _temp_dir: Option<TempDir>,
}

impl RocksDatabase {
    pub fn create_in_directory(path: &Path) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let db = DB::open(&opts, path)?;
        log::debug!("opened rocksdb at {}", path.display());

        Ok(Self {
            db: Arc::new(db),
            commit_lock: Arc::new(Mutex::new(())),
            path: path.to_path_buf(),
            _temp_dir: None,
        })
    }

    // "in-memory" database
    pub fn create_in_memory() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_compression_type(rocksdb::DBCompressionType::None);
        let db = DB::open(&opts, temp_dir.path())?;

        Ok(Self {
            db: Arc::new(db),
            commit_lock: Arc::new(Mutex::new(())),
            path: temp_dir.path().to_path_buf(),
            _temp_dir: Some(temp_dir),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

impl Database for RocksDatabase {
    type Transaction = RocksTransaction;

    fn transaction(&self) -> RocksTransaction {
        RocksTransaction {
            db: Arc::clone(&self.db),
            commit_lock: Arc::clone(&self.commit_lock),
            staged: BTreeMap::new(),
        }
    }
}

pub struct RocksTransaction {
    db: Arc<DB>,
    commit_lock: Arc<Mutex<()>>,
    staged: BTreeMap<Vec<u8>, Staged>,
}

#[async_trait]
impl DatabaseTransaction for RocksTransaction {
    async fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        if let Some(staged) = self.staged.get(key) {
            return Ok(staged.value().cloned());
        }

        Ok(self.db.get(key)?)
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
        let _guard = self.commit_lock.lock().await;

        let mut batch = WriteBatch::default();
        for (key, staged) in &self.staged {
            match staged {
                Staged::Insert(value) => {
                    if self.db.get_pinned(key)?.is_some() {
                        let err = Error::duplicate_key(key);
                        log::debug!("commit rejected: {}", err);
                        return Err(err);
                    }
                    batch.put(key, value);
                }
                Staged::Put(value) => batch.put(key, value),
                Staged::Delete => batch.delete(key),
            }
        }

        log::debug!("committing {} staged writes to rocksdb", self.staged.len());
        self.db.write(batch)?;
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
    async fn test_commit_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let db = RocksDatabase::create_in_directory(dir.path()).unwrap();
            let mut txn = db.transaction();
            txn.set(b"genesis", b"0xabc".to_vec()).await.unwrap();
            txn.commit().await.unwrap();
            db.flush().unwrap();
        }

        let db = RocksDatabase::create_in_directory(dir.path()).unwrap();
        let txn = db.transaction();
        assert_eq!(txn.get(b"genesis").await.unwrap(), Some(b"0xabc".to_vec()));
    }

    #[tokio::test]
    async fn test_discard_leaves_store_untouched() {
        let db = RocksDatabase::create_in_memory().unwrap();

        let mut txn = db.transaction();
        txn.set(b"k", b"v".to_vec()).await.unwrap();
        txn.discard().await.unwrap();

        assert_eq!(db.transaction().get(b"k").await.unwrap(), None);
        assert!(db.path().exists());
    }

    #[tokio::test]
    async fn test_insert_fails_commit_when_key_committed_meanwhile() {
        let db = RocksDatabase::create_in_memory().unwrap();

        let mut first = db.transaction();
        let mut second = db.transaction();
        first.insert(b"k", b"1".to_vec()).await.unwrap();
        second.set(b"other", b"x".to_vec()).await.unwrap();
        second.insert(b"k", b"2".to_vec()).await.unwrap();

        first.commit().await.unwrap();
        assert!(second.commit().await.unwrap_err().is_duplicate_key());

        let reader = db.transaction();
        assert_eq!(reader.get(b"k").await.unwrap(), Some(b"1".to_vec()));
        assert_eq!(reader.get(b"other").await.unwrap(), None);
    }
}
