//! Key-value storage trait and implementations

use crate::error::StorageResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

/// String slots addressed by key. An absent key reads as `None`.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if it was never set.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

#[async_trait]
impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value).await
    }
}

/// One file per key under `base_path`.
///
/// ASCII letters, digits and `-` are kept in the file name. Every other byte,
/// `_` included, becomes `_XX` (upper-case hex), so distinct keys never share
/// a file: `@PokemonFavorites` lives in `_40PokemonFavorites.json`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStorage {
    base_path: PathBuf,
}

impl FileKeyValueStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let mut file_name = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                file_name.push(byte as char);
            } else {
                file_name.push_str(&format!("_{:02X}", byte));
            }
        }
        self.base_path.join(format!("{}.json", file_name))
    }
}

#[async_trait]
impl KeyValueStorage for FileKeyValueStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.base_path).await?;

        // Write beside the target and rename so readers never see a torn file.
        let path = self.key_path(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).await?;
        fs::rename(&tmp_path, &path).await?;

        Ok(())
    }
}

/// Process-local storage, used for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryKeyValueStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slots
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
