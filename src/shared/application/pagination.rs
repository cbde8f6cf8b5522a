/// Pagination policy for catalog search results
///
/// The provider reports a total page count that it does not actually honour
/// past a fixed bound, so every page number that reaches the catalog or the
/// rendering side goes through these helpers first.
use serde::{Deserialize, Serialize};

/// Highest page the catalog will serve, whatever total it reports.
pub const MAX_PROVIDER_PAGES: u32 = 500;

/// Clamp a requested page into `[1, total_pages]`; a result set with no pages has page 1.
pub fn clamp_page(requested: i64, total_pages: u32) -> u32 {
    if total_pages == 0 {
        return 1;
    }
    requested.clamp(1, i64::from(total_pages)) as u32
}

pub fn effective_total_pages(reported: u32) -> u32 {
    reported.min(MAX_PROVIDER_PAGES)
}

pub fn can_go_previous(page: u32) -> bool {
    page > 1
}

pub fn can_go_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

/// Pager snapshot handed to the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNavigation {
    pub page: u32,
    pub total_pages: u32,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl PageNavigation {
    pub fn new(page: u32, total_pages: u32) -> Self {
        let total_pages = effective_total_pages(total_pages);
        let page = clamp_page(i64::from(page), total_pages);

        Self {
            page,
            total_pages,
            can_go_previous: can_go_previous(page),
            can_go_next: can_go_next(page, total_pages),
        }
    }

    /// A single page of results is shown without a pager.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    pub fn previous(&self) -> Option<u32> {
        self.can_go_previous.then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.can_go_next.then(|| self.page + 1)
    }
}
