pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileFavoritesStorage;
pub use memory_storage::InMemoryFavoritesStorage;
