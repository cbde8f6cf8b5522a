use super::models::{TmdbCredits, TmdbMovie, TmdbMovieDetails, TmdbSearchResponse};
use crate::modules::catalog::domain::entities::{
    CastMember, Credits, CrewMember, Genre, MovieDetail, MovieSummary, SearchResultPage,
};
use crate::shared::application::effective_total_pages;
use crate::shared::errors::{AppError, CatalogError, CatalogResult};
use crate::shared::utils::Validator;

/// Validates raw TMDB payloads and turns them into domain records
///
/// Validation fails closed: one malformed item makes the whole page a
/// decode failure instead of being silently dropped.
#[derive(Debug, Clone, Default)]
pub struct TmdbMapper;

impl TmdbMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_search_page(
        &self,
        query: &str,
        requested_page: u32,
        response: TmdbSearchResponse,
    ) -> CatalogResult<SearchResultPage> {
        let items = response
            .results
            .into_iter()
            .map(|movie| self.map_movie(movie))
            .collect::<CatalogResult<Vec<_>>>()?;

        let total_pages = effective_total_pages(response.total_pages.unwrap_or(0));
        let echoed_page = response.page.unwrap_or(requested_page);

        // The echoed page is kept as is; a page past the end is refetched upstream.
        Ok(SearchResultPage {
            query: query.to_string(),
            page: echoed_page.max(1),
            items,
            total_results: response.total_results.unwrap_or(0),
            total_pages,
        })
    }

    pub fn map_movie(&self, movie: TmdbMovie) -> CatalogResult<MovieSummary> {
        Validator::validate_movie_id(movie.id).map_err(Self::decode)?;
        let title = Self::required_title(movie.id, movie.title)?;
        let release_date = Self::release_date(movie.release_date)?;
        Self::check_vote_average(movie.vote_average)?;

        Ok(MovieSummary {
            id: movie.id,
            title,
            release_date,
            poster_path: Self::non_empty(movie.poster_path),
            vote_average: movie.vote_average,
        })
    }

    pub fn map_details(&self, details: TmdbMovieDetails) -> CatalogResult<MovieDetail> {
        Validator::validate_movie_id(details.id).map_err(Self::decode)?;
        let title = Self::required_title(details.id, details.title)?;
        let release_date = Self::release_date(details.release_date)?;
        Self::check_vote_average(details.vote_average)?;

        let genres = details
            .genres
            .unwrap_or_default()
            .into_iter()
            .map(|g| Genre {
                id: g.id,
                name: g.name,
            })
            .collect();

        Ok(MovieDetail {
            id: details.id,
            title,
            release_date,
            poster_path: Self::non_empty(details.poster_path),
            vote_average: details.vote_average,
            overview: Self::non_empty(details.overview),
            runtime_minutes: details.runtime,
            genres,
            original_language: Self::non_empty(details.original_language),
            credits: Self::map_credits(details.credits.unwrap_or_default()),
        })
    }

    fn map_credits(credits: TmdbCredits) -> Credits {
        let mut cast: Vec<CastMember> = credits
            .cast
            .into_iter()
            .enumerate()
            .map(|(index, member)| CastMember {
                name: member.name,
                order: member.order.unwrap_or(index as u32),
            })
            .collect();
        // Stable: ties keep the catalog's own ordering
        cast.sort_by_key(|member| member.order);

        let crew = credits
            .crew
            .into_iter()
            .map(|member| CrewMember {
                name: member.name,
                job: member.job,
            })
            .collect();

        Credits { cast, crew }
    }

    fn required_title(id: u64, title: Option<String>) -> CatalogResult<String> {
        let title = title.unwrap_or_default();
        Validator::validate_movie_title(&title)
            .map_err(|e| CatalogError::Decode(format!("Movie {}: {}", id, e)))?;
        Ok(title)
    }

    fn release_date(date: Option<String>) -> CatalogResult<Option<String>> {
        match date {
            Some(date) => {
                Validator::validate_release_date(&date).map_err(Self::decode)?;
                Ok(Self::non_empty(Some(date)))
            }
            None => Ok(None),
        }
    }

    fn check_vote_average(vote_average: Option<f64>) -> CatalogResult<()> {
        match vote_average {
            Some(v) => Validator::validate_vote_average(v).map_err(Self::decode),
            None => Ok(()),
        }
    }

    fn non_empty(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.is_empty())
    }

    fn decode(err: AppError) -> CatalogError {
        CatalogError::Decode(err.to_string())
    }
}
