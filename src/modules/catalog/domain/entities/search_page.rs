use serde::{Deserialize, Serialize};

use super::movie::MovieSummary;
use crate::shared::application::PageNavigation;

/// One bounded page of search results
///
/// `page` is always inside `[1, total_pages]` when there are pages, and 1 otherwise;
/// `total_pages` never exceeds the provider bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub query: String,
    pub page: u32,
    pub items: Vec<MovieSummary>,
    pub total_results: u64,
    pub total_pages: u32,
}

impl SearchResultPage {
    pub fn navigation(&self) -> PageNavigation {
        PageNavigation::new(self.page, self.total_pages)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
