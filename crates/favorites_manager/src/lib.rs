//! # Favorites Manager
//!
//! Owns the persisted favorites sequence. Every operation is a serialized
//! read-modify-write cycle over a pluggable key-value storage.

pub mod entry;
pub mod error;
pub mod storage;
pub mod store;

// Re-exports
pub use entry::FavoriteEntry;
pub use error::{FavoritesError, Result, StorageError, StorageResult};
pub use storage::{FileKeyValueStorage, KeyValueStorage, MemoryKeyValueStorage};
pub use store::{FavoritesStore, FAVORITES_STORAGE_KEY};
