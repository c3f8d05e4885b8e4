//! Transactional key-value storage.
//!
//! Writes are staged inside a [`DatabaseTransaction`] and only become
//! visible to other transactions once committed. [`store_unique_key`] builds
//! write-once keys on top of that.

mod error;

pub mod database;
pub mod memory;
pub mod rocks;
pub mod unique;

pub use database::{Database, DatabaseTransaction};
pub use error::Error;
pub use memory::MemoryDatabase;
pub use rocks::RocksDatabase;
pub use unique::store_unique_key;

pub type Result<T> = std::result::Result<T, Error>;
