use serde::Serialize;

use crate::shared::errors::CatalogError;

/// Externally observable state of one catalog request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(CatalogError),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            RequestState::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Human-readable failure text for the rendering side
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success(_) => "success",
            RequestState::Failure(_) => "failure",
        }
    }
}

impl<T> From<Result<T, CatalogError>> for RequestState<T> {
    fn from(outcome: Result<T, CatalogError>) -> Self {
        match outcome {
            Ok(data) => RequestState::Success(data),
            Err(err) => RequestState::Failure(err),
        }
    }
}
