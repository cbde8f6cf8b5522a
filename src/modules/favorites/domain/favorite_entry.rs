use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::MovieSummary;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Stored projection of a movie; the JSON field names are the persisted format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl FavoriteEntry {
    /// Same rules the catalog applies to the movies it returns
    pub fn validate(&self) -> AppResult<()> {
        Validator::validate_movie_id(self.id)?;
        Validator::validate_movie_title(&self.title)?;
        if let Some(vote_average) = self.vote_average {
            Validator::validate_vote_average(vote_average)?;
        }
        if let Some(date) = &self.release_date {
            Validator::validate_release_date(date)?;
        }
        Ok(())
    }

    pub fn to_summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            release_date: self.release_date.clone(),
            poster_path: self.poster_path.clone(),
            vote_average: self.vote_average,
        }
    }
}

impl From<MovieSummary> for FavoriteEntry {
    fn from(movie: MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            poster_path: movie.poster_path,
            vote_average: movie.vote_average,
        }
    }
}

impl From<&MovieSummary> for FavoriteEntry {
    fn from(movie: &MovieSummary) -> Self {
        Self::from(movie.clone())
    }
}
