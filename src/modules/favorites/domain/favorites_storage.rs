use crate::shared::errors::AppResult;

/// Name of the durable blob holding the favorites list.
pub const FAVORITES_KEY: &str = "tmdb_favorites_v1";

/// Synchronous key/blob storage the favorites store mirrors itself into
pub trait FavoritesStorage: Send + Sync {
    /// `Ok(None)` when nothing was ever written under `key`
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the whole blob under `key`
    fn write(&self, key: &str, payload: &str) -> AppResult<()>;
}
