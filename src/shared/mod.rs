// Shared kernel used by the catalog and favorites modules

pub mod application; // Shared application policies (pagination)
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod utils; // Logging and validation helpers

pub use config::CatalogConfig;
pub use errors::{AppError, AppResult, CatalogError, CatalogResult};
