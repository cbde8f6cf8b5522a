use serde::{Deserialize, Serialize};

/// Poster sizes the catalog's image CDN serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    W92,
    W154,
    W342,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W92 => "w92",
            ImageSize::W154 => "w154",
            ImageSize::W342 => "w342",
            ImageSize::Original => "original",
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compose a full image URL, or `None` when the movie has no image (render a placeholder)
pub fn image_url(base_url: &str, path: Option<&str>, size: ImageSize) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{}/{}{}", base_url.trim_end_matches('/'), size, p))
}
