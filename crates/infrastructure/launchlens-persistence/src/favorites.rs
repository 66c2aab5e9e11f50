use std::sync::Arc;

use launchlens_core::Launch;
use tracing::{debug, warn};

use crate::codec::{decode_favorites, encode_favorites};
use crate::{KeyValueStore, StorageError};

/// Insertion-ordered collection of favorited launches, unique by id, kept as
/// one JSON array under a single storage key.
///
/// Every mutation is a full read-modify-write of that value. Nothing serializes
/// concurrent mutations: two `add`s whose reads both complete before either
/// write can lose one of the entries.
pub struct FavoritesStore<K> {
    backend: Arc<K>,
    key: String,
}

impl<K> Clone for FavoritesStore<K> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            key: self.key.clone(),
        }
    }
}

impl<K: KeyValueStore> FavoritesStore<K> {
    pub fn new(backend: Arc<K>) -> Self {
        Self::with_key(backend, launchlens_config::FAVORITES_KEY)
    }

    pub fn with_key(backend: Arc<K>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &Arc<K> {
        &self.backend
    }

    /// Stored favorites in insertion order.
    ///
    /// A value that no longer decodes reads as an empty list; only backend
    /// failures are returned as errors.
    pub async fn list(&self) -> Result<Vec<Launch>, StorageError> {
        let Some(bytes) = self.backend.get(&self.key).await? else {
            return Ok(Vec::new());
        };
        match decode_favorites(&bytes) {
            Ok(favorites) => Ok(favorites),
            Err(e) => {
                warn!("favorites under '{}' are unreadable, treating as empty: {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    /// Append `launch` unless its id is already stored. Returns whether the
    /// stored list changed.
    pub async fn add(&self, launch: &Launch) -> Result<bool, StorageError> {
        let mut favorites = self.list().await?;
        if favorites.iter().any(|f| f.id == launch.id) {
            debug!("launch {} already favorited", launch.id);
            return Ok(false);
        }
        favorites.push(launch.clone());
        self.write(&favorites).await?;
        Ok(true)
    }

    /// Drop every entry with `id`. Returns whether anything was removed.
    pub async fn remove(&self, id: &str) -> Result<bool, StorageError> {
        let mut favorites = self.list().await?;
        let original_len = favorites.len();
        favorites.retain(|f| f.id != id);
        if favorites.len() == original_len {
            return Ok(false);
        }
        self.write(&favorites).await?;
        Ok(true)
    }

    pub async fn contains(&self, id: &str) -> Result<bool, StorageError> {
        Ok(self.list().await?.iter().any(|f| f.id == id))
    }

    async fn write(&self, favorites: &[Launch]) -> Result<(), StorageError> {
        let bytes = encode_favorites(favorites)?;
        self.backend.set(&self.key, bytes).await
    }
}
