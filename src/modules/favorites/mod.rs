pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{FavoritesStore, SharedFavorites};
pub use domain::{FavoriteEntry, FavoritesStorage, FAVORITES_KEY};
pub use infrastructure::{FileFavoritesStorage, InMemoryFavoritesStorage};
