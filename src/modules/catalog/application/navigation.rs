use serde::{Deserialize, Serialize};

const QUERY_KEY: &str = "q";
const PAGE_KEY: &str = "page";
const MOVIE_KEY: &str = "movie";

/// The only cross-view state the router shares with the core
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationParams {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub movie_id: Option<u64>,
}

impl NavigationParams {
    pub fn search(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: Some(query.into()),
            page: Some(page),
            movie_id: None,
        }
    }

    pub fn details(movie_id: u64) -> Self {
        Self {
            movie_id: Some(movie_id),
            ..Self::default()
        }
    }

    /// Apply the query normalization rule: trimmed, empty means no search and no page,
    /// non-positive pages are dropped.
    pub fn normalized(self) -> Self {
        let query = self.query.as_deref().and_then(normalize_query);
        let page = match query {
            Some(_) => self.page.filter(|p| *p > 0),
            None => None,
        };

        Self {
            query,
            page,
            movie_id: self.movie_id.filter(|id| *id > 0),
        }
    }

    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Parse `q=...&page=...&movie=...`; malformed numbers count as absent
    pub fn from_query_string(raw: &str) -> Self {
        let mut params = Self::default();

        for pair in raw.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);

            match key {
                QUERY_KEY => params.query = Some(value),
                PAGE_KEY => params.page = value.parse().ok(),
                MOVIE_KEY => params.movie_id = value.parse().ok(),
                _ => {}
            }
        }

        params.normalized()
    }

    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(query) = &self.query {
            parts.push(format!("{}={}", QUERY_KEY, urlencoding::encode(query)));
        }
        if let Some(page) = self.page {
            parts.push(format!("{}={}", PAGE_KEY, page));
        }
        if let Some(id) = self.movie_id {
            parts.push(format!("{}={}", MOVIE_KEY, id));
        }
        parts.join("&")
    }
}

/// Trim user-entered search text; `None` means "no active search"
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// Form-style encoding uses '+' for spaces
fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    urlencoding::decode(&value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(value)
}
