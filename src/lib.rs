pub mod modules;
pub mod shared;

use modules::{
    catalog::{MovieCatalog, QueryStateAdapter, TmdbClient},
    favorites::{
        FavoritesStorage, FavoritesStore, FileFavoritesStorage, InMemoryFavoritesStorage,
        SharedFavorites,
    },
};
use shared::{AppResult, CatalogConfig};
use std::sync::Arc;

/// Composition root: one catalog client, one favorites store and the adapter that ties them together
pub struct CineFinder {
    pub config: CatalogConfig,
    pub client: Arc<TmdbClient>,
    pub favorites: SharedFavorites,
    pub adapter: QueryStateAdapter,
}

impl CineFinder {
    pub fn from_config(config: CatalogConfig) -> AppResult<Self> {
        let storage: Arc<dyn FavoritesStorage> = match &config.data_dir {
            Some(dir) => Arc::new(FileFavoritesStorage::new(dir)?),
            None => {
                log::warn!("No data directory configured, favorites will not survive a restart");
                Arc::new(InMemoryFavoritesStorage::new())
            }
        };

        let client = Arc::new(TmdbClient::new(config.clone()));
        let favorites = FavoritesStore::open(storage).into_shared();

        // Cast to trait object for dependency injection
        let catalog: Arc<dyn MovieCatalog> = client.clone();
        let adapter = QueryStateAdapter::new(catalog, Arc::clone(&favorites));

        log::info!("CineFinder initialized against {}", config.base_url);
        Ok(Self {
            config,
            client,
            favorites,
            adapter,
        })
    }

    /// Load configuration from the environment and build the application
    pub fn from_env() -> AppResult<Self> {
        Self::from_config(CatalogConfig::from_env()?)
    }
}
