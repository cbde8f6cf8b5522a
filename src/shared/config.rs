use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

/// Catalog and storage configuration
///
/// Language and the adult-content filter are fixed per process; nothing at
/// runtime changes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub include_adult: bool,
    /// Directory holding the favorites blob; `None` keeps favorites in memory.
    pub data_dir: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            include_adult: false,
            data_dir: None,
        }
    }

    /// Load configuration from the environment (and a `.env` file when present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("TMDB_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError("TMDB_API_KEY is not set".to_string()))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("TMDB_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Ok(image_base_url) = env::var("TMDB_IMAGE_BASE_URL") {
            config = config.with_image_base_url(image_base_url);
        }
        if let Ok(language) = env::var("TMDB_LANGUAGE") {
            config = config.with_language(language);
        }
        if let Ok(dir) = env::var("CINEFINDER_DATA_DIR") {
            config = config.with_data_dir(dir);
        }

        log::debug!(
            "Catalog config loaded: base_url={}, language={}, data_dir={:?}",
            config.base_url,
            config.language,
            config.data_dir
        );
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }
}
