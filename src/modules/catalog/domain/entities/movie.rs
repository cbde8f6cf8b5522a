use serde::{Deserialize, Serialize};

/// Number of billed cast members shown on the details view.
pub const TOP_BILLED_CAST: usize = 10;

const DIRECTOR_JOB: &str = "Director";

/// Minimal movie record shown in result grids and stored as a favorite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl MovieSummary {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_date: None,
            poster_path: None,
            vote_average: None,
        }
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    pub fn with_poster_path(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    pub fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = Some(vote_average);
        self
    }

    pub fn release_year(&self) -> Option<&str> {
        release_year(self.release_date.as_deref())
    }

    /// One decimal place, or `-` when the catalog has no rating.
    pub fn rating_label(&self) -> String {
        rating_label(self.vote_average)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

/// Aggregated details for one title, credits included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub overview: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub genres: Vec<Genre>,
    pub original_language: Option<String>,
    pub credits: Credits,
}

impl MovieDetail {
    /// Projection used for grids and favorites
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            release_date: self.release_date.clone(),
            poster_path: self.poster_path.clone(),
            vote_average: self.vote_average,
        }
    }

    /// First crew member credited with the `Director` job
    pub fn director(&self) -> Option<&str> {
        self.credits
            .crew
            .iter()
            .find(|member| member.job == DIRECTOR_JOB)
            .map(|member| member.name.as_str())
    }

    /// Cast names in billing order, as delivered by the catalog
    pub fn top_cast(&self, limit: usize) -> Vec<&str> {
        self.credits
            .cast
            .iter()
            .take(limit)
            .map(|member| member.name.as_str())
            .collect()
    }

    pub fn cast_line(&self) -> Option<String> {
        let names = self.top_cast(TOP_BILLED_CAST);
        (!names.is_empty()).then(|| names.join(", "))
    }

    pub fn runtime_label(&self) -> Option<String> {
        self.runtime_minutes
            .filter(|minutes| *minutes > 0)
            .map(|minutes| format!("{} min", minutes))
    }

    pub fn original_language_label(&self) -> Option<String> {
        self.original_language
            .as_deref()
            .filter(|lang| !lang.is_empty())
            .map(str::to_uppercase)
    }

    pub fn release_year(&self) -> Option<&str> {
        release_year(self.release_date.as_deref())
    }

    pub fn rating_label(&self) -> String {
        rating_label(self.vote_average)
    }
}

fn release_year(date: Option<&str>) -> Option<&str> {
    date.filter(|d| d.len() >= 4).and_then(|d| d.get(..4))
}

fn rating_label(vote_average: Option<f64>) -> String {
    vote_average
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "-".to_string())
}
