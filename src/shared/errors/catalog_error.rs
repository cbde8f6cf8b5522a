use serde::Serialize;
use thiserror::Error;

/// Failure of a single round trip against the remote movie catalog.
///
/// Every variant is recoverable: controllers surface it as
/// `RequestState::Failure` and the rendering side shows the `Display` text.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum CatalogError {
    /// No response was received (DNS, refused connection, broken stream).
    #[error("Network error: {0}")]
    Network(String),

    /// A response arrived with a non-2xx status.
    #[error("Catalog returned HTTP {0}")]
    Http(u16),

    /// The response body did not match the expected shape.
    #[error("Invalid catalog response: {0}")]
    Decode(String),
}

impl CatalogError {
    pub fn is_decode(&self) -> bool {
        matches!(self, CatalogError::Decode(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Http(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            CatalogError::Http(status.as_u16())
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else if err.is_timeout() {
            CatalogError::Network("Request timeout".to_string())
        } else if err.is_connect() {
            CatalogError::Network("Failed to connect to the movie catalog".to_string())
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
