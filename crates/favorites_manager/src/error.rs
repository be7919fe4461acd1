//! Favorites error types

use dex_core::SpeciesId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("Species {0} is not in favorites")]
    NotFound(SpeciesId),

    #[error("Stored favorites are corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, FavoritesError>;
