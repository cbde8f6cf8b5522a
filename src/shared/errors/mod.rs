pub mod app_error;
pub mod catalog_error;

pub use app_error::{AppError, AppResult};
pub use catalog_error::{CatalogError, CatalogResult};
