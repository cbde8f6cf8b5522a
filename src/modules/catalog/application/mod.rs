pub mod navigation;
pub mod query_state;
pub mod request_state;
pub mod resource_controller;

pub use navigation::{normalize_query, NavigationParams};
pub use query_state::QueryStateAdapter;
pub use request_state::RequestState;
pub use resource_controller::{
    DetailsController, DetailsFetcher, Generation, RequestTicket, ResourceController,
    ResourceFetcher, SearchController, SearchFetcher, SearchQuery,
};
