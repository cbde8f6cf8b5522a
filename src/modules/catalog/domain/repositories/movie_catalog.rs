use async_trait::async_trait;

use crate::modules::catalog::domain::entities::{MovieDetail, SearchResultPage};
use crate::shared::errors::CatalogResult;

/// Read-only access to the remote movie catalog
///
/// Each call is exactly one round trip: no retries, no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search titles; callers never pass an empty query.
    async fn search(&self, query: &str, page: u32) -> CatalogResult<SearchResultPage>;

    /// Details for one title, credits included
    async fn get_details(&self, id: u64) -> CatalogResult<MovieDetail>;
}
