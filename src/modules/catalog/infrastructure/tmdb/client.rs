use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::mapper::TmdbMapper;
use super::models::{TmdbError, TmdbMovieDetails, TmdbSearchResponse};
use crate::modules::catalog::domain::{
    image_url, ImageSize, MovieCatalog, MovieDetail, SearchResultPage,
};
use crate::shared::application::MAX_PROVIDER_PAGES;
use crate::shared::config::CatalogConfig;
use crate::shared::errors::{CatalogError, CatalogResult};
use crate::shared::utils::{LogContext, TimedOperation};

/// TMDB (The Movie Database) REST client
///
/// One request per call. Transport failures, non-2xx statuses and bodies that
/// fail validation come back as the matching [`CatalogError`] variant.
pub struct TmdbClient {
    http_client: Client,
    config: CatalogConfig,
    mapper: TmdbMapper,
}

impl TmdbClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create client with custom HTTP client (for testing)
    pub fn with_client(http_client: Client, config: CatalogConfig) -> Self {
        Self {
            http_client,
            config,
            mapper: TmdbMapper::new(),
        }
    }

    /// Build URL with API key, fixed language and additional query parameters
    fn build_url_with_params(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}&language={}",
            self.config.base_url,
            endpoint,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(&self.config.language)
        );
        for (key, value) in params {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
        }
        url
    }

    /// Full image URL for a poster path, `None` when the movie has no poster
    pub fn image_url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        image_url(&self.config.image_base_url, path, size)
    }

    async fn get_json<T>(&self, endpoint: &str, url: &str) -> CatalogResult<T>
    where
        T: DeserializeOwned,
    {
        LogContext::api_call(endpoint, "", None);
        let timer = TimedOperation::new(&format!("TMDB {}", endpoint));

        let response = self
            .http_client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                log::warn!("TMDB: request to {} failed: {}", endpoint, e);
                CatalogError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            CatalogError::Network(format!("Failed to read TMDB response: {}", e))
        })?;

        if !status.is_success() {
            match serde_json::from_str::<TmdbError>(&body) {
                Ok(err) => log::warn!(
                    "TMDB: {} returned {} ({})",
                    endpoint,
                    status,
                    err.status_message
                ),
                Err(_) => log::warn!("TMDB: {} returned {}", endpoint, status),
            }
            return Err(CatalogError::Http(status.as_u16()));
        }

        let duration = timer.finish();
        LogContext::api_call(endpoint, status.as_str(), Some(duration));

        serde_json::from_str(&body).map_err(|e| {
            CatalogError::Decode(format!(
                "Failed to parse TMDB {} response: {}. Response: {}",
                endpoint,
                e,
                truncate(&body, 200)
            ))
        })
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn search(&self, query: &str, page: u32) -> CatalogResult<SearchResultPage> {
        let page = page.clamp(1, MAX_PROVIDER_PAGES);
        let url = self.build_url_with_params(
            "/search/movie",
            &[
                ("query", query.to_string()),
                ("page", page.to_string()),
                ("include_adult", self.config.include_adult.to_string()),
            ],
        );

        LogContext::search_operation(query, page, None);

        let response: TmdbSearchResponse = self.get_json("/search/movie", &url).await?;
        let result = self.mapper.map_search_page(query, page, response)?;

        LogContext::search_operation(query, result.page, Some(result.items.len()));
        Ok(result)
    }

    async fn get_details(&self, id: u64) -> CatalogResult<MovieDetail> {
        let endpoint = format!("/movie/{}", id);
        let url =
            self.build_url_with_params(&endpoint, &[("append_to_response", "credits".to_string())]);

        log::info!("TMDB: Getting movie details for ID '{}'", id);

        let response: TmdbMovieDetails = self.get_json(&endpoint, &url).await?;
        let detail = self.mapper.map_details(response)?;

        log::info!(
            "TMDB: Retrieved '{}' ({} cast, {} crew)",
            detail.title,
            detail.credits.cast.len(),
            detail.credits.crew.len()
        );
        Ok(detail)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TmdbClient {
        TmdbClient::new(CatalogConfig::new("test-key").with_base_url("http://localhost:9"))
    }

    #[test]
    fn test_build_url_encodes_params() {
        let url = client().build_url_with_params(
            "/search/movie",
            &[("query", "Amélie & co".to_string()), ("page", "2".to_string())],
        );
        assert_eq!(
            url,
            "http://localhost:9/search/movie?api_key=test-key&language=pt-BR&query=Am%C3%A9lie%20%26%20co&page=2"
        );
    }

    #[test]
    fn test_image_url() {
        let client = client();
        assert_eq!(
            client.image_url(Some("/test.jpg"), ImageSize::W342).as_deref(),
            Some("https://image.tmdb.org/t/p/w342/test.jpg")
        );
        assert_eq!(client.image_url(None, ImageSize::Original), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 200), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
