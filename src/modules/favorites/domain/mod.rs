pub mod favorite_entry;
pub mod favorites_storage;

pub use favorite_entry::FavoriteEntry;
pub use favorites_storage::{FavoritesStorage, FAVORITES_KEY};
