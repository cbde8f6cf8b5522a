use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::modules::favorites::domain::{FavoriteEntry, FavoritesStorage, FAVORITES_KEY};
use crate::shared::utils::LogContext;
use crate::{log_info, log_warn};

/// Favorites shared between the views of one process
pub type SharedFavorites = Arc<RwLock<FavoritesStore>>;

/// Ordered, id-deduplicated favorites mirrored to durable storage
///
/// Every mutation rewrites the whole list before returning. Storage failures
/// never surface to callers: a bad read starts from an empty list and a
/// failed write rolls the in-memory list back to what storage last accepted.
pub struct FavoritesStore {
    storage: Arc<dyn FavoritesStorage>,
    key: String,
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    pub fn open(storage: Arc<dyn FavoritesStorage>) -> Self {
        Self::open_with_key(storage, FAVORITES_KEY)
    }

    pub fn open_with_key(storage: Arc<dyn FavoritesStorage>, key: &str) -> Self {
        let entries = Self::load(storage.as_ref(), key);
        log_info!("Favorites: loaded {} entries from '{}'", entries.len(), key);
        Self {
            storage,
            key: key.to_string(),
            entries,
        }
    }

    pub fn into_shared(self) -> SharedFavorites {
        Arc::new(RwLock::new(self))
    }

    /// Append unless the id is already present; returns whether the list changed
    pub fn add(&mut self, movie: impl Into<FavoriteEntry>) -> bool {
        let entry = movie.into();
        if self.contains(entry.id) {
            return false;
        }
        self.entries.push(entry);
        if self.persist() {
            return true;
        }
        self.entries.pop();
        false
    }

    /// Remove by id; returns whether the list changed
    pub fn remove(&mut self, id: u64) -> bool {
        let Some(position) = self.entries.iter().position(|entry| entry.id == id) else {
            return false;
        };
        let removed = self.entries.remove(position);
        if self.persist() {
            return true;
        }
        self.entries.insert(position, removed);
        false
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Snapshot in insertion order
    pub fn list(&self) -> Vec<FavoriteEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the in-memory list with what storage currently holds
    pub fn reload(&mut self) {
        self.entries = Self::load(self.storage.as_ref(), &self.key);
    }

    fn load(storage: &dyn FavoritesStorage, key: &str) -> Vec<FavoriteEntry> {
        let payload = match storage.read(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                LogContext::error_with_context(&e, "Favorites: unreadable storage, starting empty");
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Vec<FavoriteEntry>>(&payload) {
            Ok(entries) => entries,
            Err(e) => {
                log_warn!("Favorites: stored payload is invalid ({}), starting empty", e);
                return Vec::new();
            }
        };

        if let Err(e) = entries.iter().try_for_each(FavoriteEntry::validate) {
            log_warn!("Favorites: stored entry is invalid ({}), starting empty", e);
            return Vec::new();
        }

        let mut seen = HashSet::new();
        entries
            .into_iter()
            .filter(|entry| seen.insert(entry.id))
            .collect()
    }

    /// Write the whole list; returns whether storage accepted it
    fn persist(&self) -> bool {
        let payload = match serde_json::to_string(&self.entries) {
            Ok(payload) => payload,
            Err(e) => {
                log_warn!("Favorites: failed to serialize favorites: {}", e);
                return false;
            }
        };

        match self.storage.write(&self.key, &payload) {
            Ok(()) => {
                LogContext::storage_operation("write", &self.key, self.entries.len());
                true
            }
            Err(e) => {
                LogContext::error_with_context(&e, "Favorites: failed to persist favorites");
                false
            }
        }
    }
}
