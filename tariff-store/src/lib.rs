//! Tariff Store
//!
//! The catalog store: an ordered, write-through list of service records.
//!
//! - `port`: the key-value persistence port and its in-memory/file backends
//! - `ids`: identifier generators injected into the store
//! - `catalog`: create/update/delete over the record list

pub mod catalog;
pub mod error;
pub mod ids;
pub mod port;

pub use catalog::{CatalogStore, STORAGE_KEY};
pub use error::{StorageError, StoreError};
pub use ids::{IdGenerator, SequentialIds, TimestampIds};
pub use port::{FileKvStore, KvStore, MemoryKvStore};
