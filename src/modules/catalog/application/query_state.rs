use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use super::navigation::{normalize_query, NavigationParams};
use super::request_state::RequestState;
use super::resource_controller::{
    DetailsController, DetailsFetcher, ResourceController, SearchController, SearchFetcher,
    SearchQuery,
};
use crate::modules::catalog::domain::{MovieCatalog, MovieDetail, MovieSummary, SearchResultPage};
use crate::modules::favorites::SharedFavorites;
use crate::shared::application::{clamp_page, PageNavigation};
use crate::{log_debug, log_info};

/// Maps router parameters and user actions onto the catalog controllers and favorites
///
/// The router owns [`NavigationParams`]; every action here returns the
/// parameters the router should now show.
pub struct QueryStateAdapter {
    search: SearchController,
    details: DetailsController,
    favorites: SharedFavorites,
    params: Mutex<NavigationParams>,
}

impl QueryStateAdapter {
    pub fn new(catalog: Arc<dyn MovieCatalog>, favorites: SharedFavorites) -> Self {
        Self {
            search: ResourceController::new(
                "search",
                Arc::new(SearchFetcher::new(Arc::clone(&catalog))),
            ),
            details: ResourceController::new("details", Arc::new(DetailsFetcher::new(catalog))),
            favorites,
            params: Mutex::new(NavigationParams::default()),
        }
    }

    pub async fn navigation(&self) -> NavigationParams {
        self.params.lock().await.clone()
    }

    pub fn search_state(&self) -> RequestState<SearchResultPage> {
        self.search.current()
    }

    pub fn details_state(&self) -> RequestState<MovieDetail> {
        self.details.current()
    }

    pub fn subscribe_search(&self) -> watch::Receiver<RequestState<SearchResultPage>> {
        self.search.subscribe()
    }

    pub fn subscribe_details(&self) -> watch::Receiver<RequestState<MovieDetail>> {
        self.details.subscribe()
    }

    pub fn favorites(&self) -> &SharedFavorites {
        &self.favorites
    }

    /// Follow parameters the router changed on its own (back/forward, deep links)
    pub async fn apply_navigation(&self, params: NavigationParams) -> NavigationParams {
        let params = params.normalized();
        *self.params.lock().await = params.clone();

        let search = params
            .query
            .clone()
            .map(|query| SearchQuery::new(query, params.effective_page()));

        let (search_published, _) = futures::join!(
            self.search.set_params(search),
            self.details.set_params(params.movie_id)
        );
        if search_published {
            if let Some(settled) = self.settle_search_page().await {
                return settled;
            }
        }
        params
    }

    /// Submit the search box. Blank text clears the search; anything else starts at page 1.
    ///
    /// Re-submitting the current search starts a fresh request.
    pub async fn submit_search(&self, raw: &str) -> NavigationParams {
        let query = normalize_query(raw);
        let params = NavigationParams {
            page: query.as_ref().map(|_| 1),
            query,
            movie_id: None,
        };
        *self.params.lock().await = params.clone();

        let search = params.query.clone().map(|query| SearchQuery::new(query, 1));
        log_info!("Search submitted: {:?}", search);

        self.details.set_params(None).await;
        if search.is_some() && self.search.params().await == search {
            self.search.reload().await;
        } else {
            self.search.set_params(search).await;
        }
        params
    }

    /// Move the active search to another page, clamped to the last known total.
    ///
    /// `None` when no search is active.
    pub async fn go_to_page(&self, requested: i64) -> Option<NavigationParams> {
        let current = self.search.params().await?;

        let page = match self.search.current().data() {
            Some(result) => clamp_page(requested, result.total_pages),
            None => requested.max(1).min(i64::from(u32::MAX)) as u32,
        };
        log_debug!("Go to page {} (requested {})", page, requested);

        let params = {
            let mut nav = self.params.lock().await;
            nav.page = Some(page);
            nav.clone()
        };
        let published = self
            .search
            .set_params(Some(SearchQuery::new(current.query, page)))
            .await;
        if published {
            if let Some(settled) = self.settle_search_page().await {
                return Some(settled);
            }
        }
        Some(params)
    }

    /// Refetch the last page when the loaded result sits past the reported total.
    ///
    /// Returns the updated parameters when a refetch was issued.
    async fn settle_search_page(&self) -> Option<NavigationParams> {
        let current = self.search.params().await?;
        let target = match self.search.current().data() {
            Some(result) if result.page > result.total_pages.max(1) => {
                clamp_page(i64::from(result.page), result.total_pages)
            }
            _ => return None,
        };
        log_info!(
            "Page {} of \"{}\" is past the last page, loading page {}",
            current.page,
            current.query,
            target
        );

        let params = {
            let mut nav = self.params.lock().await;
            nav.page = Some(target);
            nav.clone()
        };
        self.search
            .set_params(Some(SearchQuery::new(current.query, target)))
            .await;
        Some(params)
    }

    pub async fn open_details(&self, movie_id: u64) -> NavigationParams {
        let params = {
            let mut nav = self.params.lock().await;
            nav.movie_id = Some(movie_id).filter(|id| *id > 0);
            nav.clone()
        };
        self.details.set_params(params.movie_id).await;
        params
    }

    pub async fn close_details(&self) -> NavigationParams {
        let params = {
            let mut nav = self.params.lock().await;
            nav.movie_id = None;
            nav.clone()
        };
        self.details.set_params(None).await;
        params
    }

    /// Pager for the current search result, if one has loaded
    pub fn pagination(&self) -> Option<PageNavigation> {
        self.search.current().data().map(SearchResultPage::navigation)
    }

    pub async fn is_favorite(&self, movie_id: u64) -> bool {
        self.favorites.read().await.contains(movie_id)
    }

    /// Toggle a movie from a result grid or the favorites list; returns the new membership
    pub async fn toggle_favorite(&self, movie: &MovieSummary) -> bool {
        let mut favorites = self.favorites.write().await;
        if favorites.contains(movie.id) {
            favorites.remove(movie.id);
        } else {
            favorites.add(movie);
        }
        favorites.contains(movie.id)
    }

    /// Toggle the movie on the details view. No-op (`None`) until its details have loaded.
    pub async fn toggle_details_favorite(&self) -> Option<bool> {
        let detail = self.details.current().data().map(MovieDetail::summary)?;
        Some(self.toggle_favorite(&detail).await)
    }

    /// Stop publishing outcomes for both views
    pub async fn shutdown(&self) {
        self.search.teardown().await;
        self.details.teardown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::repositories::MockMovieCatalog;
    use crate::modules::catalog::domain::Credits;
    use crate::modules::favorites::{FavoritesStore, InMemoryFavoritesStorage};
    use crate::shared::errors::CatalogError;
    use mockall::predicate::eq;

    fn page(query: &str, page: u32, total_pages: u32) -> SearchResultPage {
        SearchResultPage {
            query: query.to_string(),
            page,
            items: vec![MovieSummary::new(27205, "Inception")],
            total_results: 1,
            total_pages,
        }
    }

    fn detail(id: u64) -> MovieDetail {
        MovieDetail {
            id,
            title: "Inception".to_string(),
            release_date: None,
            poster_path: None,
            vote_average: None,
            overview: None,
            runtime_minutes: None,
            genres: vec![],
            original_language: None,
            credits: Credits::default(),
        }
    }

    fn adapter(catalog: MockMovieCatalog) -> QueryStateAdapter {
        let favorites =
            FavoritesStore::open(Arc::new(InMemoryFavoritesStorage::new())).into_shared();
        QueryStateAdapter::new(Arc::new(catalog), favorites)
    }

    #[tokio::test]
    async fn test_submit_trims_and_resets_page() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search()
            .with(eq("Inception"), eq(1u32))
            .times(1)
            .returning(|q, p| Ok(page(q, p, 1)));

        let adapter = adapter(catalog);
        let params = adapter.submit_search("  Inception  ").await;
        assert_eq!(params.query.as_deref(), Some("Inception"));
        assert_eq!(params.page, Some(1));
        assert!(adapter.search_state().data().is_some());
    }

    #[tokio::test]
    async fn test_blank_submit_makes_no_call() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_search().never();

        let adapter = adapter(catalog);
        let params = adapter.submit_search("   ").await;
        assert_eq!(params, NavigationParams::default());
        assert!(adapter.search_state().is_idle());
    }

    #[tokio::test]
    async fn test_go_to_page_clamps_to_total() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search()
            .with(eq("Dune"), eq(1u32))
            .times(1)
            .returning(|q, p| Ok(page(q, p, 3)));
        catalog
            .expect_search()
            .with(eq("Dune"), eq(3u32))
            .times(1)
            .returning(|q, p| Ok(page(q, p, 3)));

        let adapter = adapter(catalog);
        adapter.submit_search("Dune").await;
        let params = adapter.go_to_page(999).await.unwrap();
        assert_eq!(params.page, Some(3));

        let nav = adapter.pagination().unwrap();
        assert!(nav.can_go_previous);
        assert!(!nav.can_go_next);
    }

    #[tokio::test]
    async fn test_go_to_page_without_search_is_noop() {
        let adapter = adapter(MockMovieCatalog::new());
        assert!(adapter.go_to_page(2).await.is_none());
    }

    #[tokio::test]
    async fn test_details_toggle_waits_for_record() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_get_details()
            .with(eq(404u64))
            .returning(|_| Err(CatalogError::Http(404)));
        catalog
            .expect_get_details()
            .with(eq(27205u64))
            .returning(|id| Ok(detail(id)));

        let adapter = adapter(catalog);
        adapter.open_details(404).await;
        assert_eq!(adapter.toggle_details_favorite().await, None);
        assert!(adapter.favorites().read().await.is_empty());

        adapter.open_details(27205).await;
        assert_eq!(adapter.toggle_details_favorite().await, Some(true));
        assert!(adapter.is_favorite(27205).await);
        assert_eq!(adapter.toggle_details_favorite().await, Some(false));
        assert!(!adapter.is_favorite(27205).await);
    }

    #[tokio::test]
    async fn test_apply_navigation_drives_both_views() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search()
            .with(eq("Heat"), eq(2u32))
            .times(1)
            .returning(|q, p| Ok(page(q, p, 5)));
        catalog
            .expect_get_details()
            .with(eq(949u64))
            .times(1)
            .returning(|id| Ok(detail(id)));

        let adapter = adapter(catalog);
        let params = adapter
            .apply_navigation(NavigationParams::from_query_string("q=Heat&page=2&movie=949"))
            .await;
        assert_eq!(params.page, Some(2));
        assert_eq!(adapter.search_state().data().unwrap().page, 2);
        assert_eq!(adapter.details_state().data().unwrap().id, 949);

        // Same parameters again: nothing refetches
        adapter.apply_navigation(params).await;
    }

    #[tokio::test]
    async fn test_deep_link_past_last_page_loads_last_page() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search()
            .with(eq("Dune"), eq(7u32))
            .times(1)
            .returning(|q, p| {
                Ok(SearchResultPage {
                    items: vec![],
                    ..page(q, p, 3)
                })
            });
        catalog
            .expect_search()
            .with(eq("Dune"), eq(3u32))
            .times(1)
            .returning(|q, p| Ok(page(q, p, 3)));

        let adapter = adapter(catalog);
        let params = adapter
            .apply_navigation(NavigationParams::from_query_string("q=Dune&page=7"))
            .await;
        assert_eq!(params.page, Some(3));
        assert_eq!(adapter.navigation().await.page, Some(3));

        let state = adapter.search_state();
        let result = state.data().unwrap();
        assert_eq!(result.page, 3);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.items.len(), 1);
    }

    #[tokio::test]
    async fn test_go_to_page_before_load_settles_on_last_page() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search()
            .with(eq("Dune"), eq(1u32))
            .times(1)
            .returning(|_, _| Err(CatalogError::Network("offline".to_string())));
        catalog
            .expect_search()
            .with(eq("Dune"), eq(9u32))
            .times(1)
            .returning(|q, p| {
                Ok(SearchResultPage {
                    items: vec![],
                    ..page(q, p, 2)
                })
            });
        catalog
            .expect_search()
            .with(eq("Dune"), eq(2u32))
            .times(1)
            .returning(|q, p| Ok(page(q, p, 2)));

        let adapter = adapter(catalog);
        adapter.submit_search("Dune").await;
        let params = adapter.go_to_page(9).await.unwrap();
        assert_eq!(params.page, Some(2));
        assert_eq!(adapter.pagination().unwrap().page, 2);
    }
}
