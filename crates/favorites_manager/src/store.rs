//! Favorites store
//!
//! All operations on one store instance run inside a single async mutex, so
//! concurrent toggles and replaces cannot interleave their read and write
//! halves and lose an update.

use crate::entry::FavoriteEntry;
use crate::error::{FavoritesError, Result, StorageError};
use crate::storage::KeyValueStorage;
use dex_core::{matches_query, NodeView, SpeciesId};
use tokio::sync::Mutex;

pub const FAVORITES_STORAGE_KEY: &str = "@PokemonFavorites";

pub struct FavoritesStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    lock: Mutex<()>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, FAVORITES_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            lock: Mutex::new(()),
        }
    }

    /// Current favorites in stored order. An absent slot is an empty list;
    /// an undecodable one is `FavoritesError::Corrupt` and is left untouched.
    pub async fn load(&self) -> Result<Vec<FavoriteEntry>> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    pub async fn is_favorited(&self, id: SpeciesId) -> Result<bool> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.iter().any(|fav| fav.id == id))
    }

    /// Favorites whose name contains `query`, case-insensitively.
    pub async fn search(&self, query: &str) -> Result<Vec<FavoriteEntry>> {
        let _guard = self.lock.lock().await;
        let mut favorites = self.read().await?;
        favorites.retain(|fav| matches_query(&fav.name, query));
        Ok(favorites)
    }

    /// Bring `entry.id` to the desired state. Adding appends, removing drops
    /// it wherever it sits; a call that changes nothing does not write.
    pub async fn toggle(
        &self,
        entry: FavoriteEntry,
        make_favorite: bool,
    ) -> Result<Vec<FavoriteEntry>> {
        let _guard = self.lock.lock().await;
        let mut favorites = self.read().await?;
        let present = favorites.iter().any(|fav| fav.id == entry.id);

        match (make_favorite, present) {
            (true, false) => favorites.push(entry),
            (false, true) => favorites.retain(|fav| fav.id != entry.id),
            _ => return Ok(favorites),
        }

        self.write(&favorites).await?;
        Ok(favorites)
    }

    /// Swap the entry for `old_id` with `new_entry`, keeping its position.
    ///
    /// Any other entry already carrying `new_entry.id` is dropped so ids stay
    /// unique. The position is relative to the entries that remain: when the
    /// dropped entry sat before `old_id`, the new entry ends up one slot
    /// earlier. Fails with `NotFound` and writes nothing when `old_id` is not
    /// a favorite.
    pub async fn replace(
        &self,
        old_id: SpeciesId,
        new_entry: FavoriteEntry,
    ) -> Result<Vec<FavoriteEntry>> {
        let _guard = self.lock.lock().await;
        let mut favorites = self.read().await?;
        let position = favorites
            .iter()
            .position(|fav| fav.id == old_id)
            .ok_or(FavoritesError::NotFound(old_id))?;

        let new_id = new_entry.id;
        favorites[position] = new_entry;
        let mut index = 0;
        favorites.retain(|fav| {
            let keep = index == position || fav.id != new_id;
            index += 1;
            keep
        });

        self.write(&favorites).await?;
        Ok(favorites)
    }

    /// Evolve-in-place: the favorite `current_id` becomes `successor`.
    pub async fn evolve(
        &self,
        current_id: SpeciesId,
        successor: &NodeView,
        api_base: &str,
    ) -> Result<Vec<FavoriteEntry>> {
        self.replace(current_id, FavoriteEntry::from_view(successor, api_base))
            .await
    }

    async fn read(&self) -> Result<Vec<FavoriteEntry>> {
        match self.storage.get(&self.key).await? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(FavoritesError::Corrupt),
        }
    }

    async fn write(&self, favorites: &[FavoriteEntry]) -> Result<()> {
        let raw = serde_json::to_string(favorites).map_err(StorageError::from)?;
        self.storage.set(&self.key, &raw).await?;
        Ok(())
    }
}
