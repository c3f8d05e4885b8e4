use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RocksDB error: {0}")]
    RocksDb(#[from] rocksdb::Error),

    #[error("duplicate key {0} found")]
    DuplicateKey(String),
}

impl Error {
    pub fn duplicate_key(key: &[u8]) -> Self {
        Error::DuplicateKey(String::from_utf8_lossy(key).into_owned())
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Error::DuplicateKey(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn open_missing() -> crate::Result<()> {
            std::fs::File::open("/nonexistent/rosetta-storage")?;
            Ok(())
        }

        let err = open_missing().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_duplicate_key());
        assert!(err.to_string().starts_with("I/O error: "));
    }
}
