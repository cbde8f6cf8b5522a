use std::sync::Arc;

use dashmap::DashMap;

use crate::modules::favorites::domain::FavoritesStorage;
use crate::shared::errors::AppResult;

/// Process-local blob storage; clones share the same blobs
#[derive(Debug, Clone, Default)]
pub struct InMemoryFavoritesStorage {
    blobs: Arc<DashMap<String, String>>,
}

impl InMemoryFavoritesStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob directly (used to simulate existing or corrupt payloads)
    pub fn insert_raw(&self, key: &str, payload: &str) {
        self.blobs.insert(key.to_string(), payload.to_string());
    }
}

impl FavoritesStorage for InMemoryFavoritesStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.blobs.get(key).map(|entry| entry.value().clone()))
    }

    fn write(&self, key: &str, payload: &str) -> AppResult<()> {
        self.blobs.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
