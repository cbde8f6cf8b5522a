pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{NavigationParams, QueryStateAdapter, RequestState, ResourceController};
pub use domain::{MovieCatalog, MovieDetail, MovieSummary, SearchResultPage};
pub use infrastructure::TmdbClient;
