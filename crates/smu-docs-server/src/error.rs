//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use smu_docs_site::{LoadError, NavigationError};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No document exists for the requested slug.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// The document exists but its frontmatter failed validation.
    #[error("Invalid frontmatter in {path}: {detail}")]
    InvalidFrontmatter { path: String, detail: String },

    /// Navigation could not be built.
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// The document could not be read.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ServerError {
    /// Map a load failure for `slug` to a response error.
    pub(crate) fn from_load(slug: &str, err: LoadError) -> Self {
        match err {
            LoadError::NotFound(_) => Self::PageNotFound(slug.to_owned()),
            LoadError::Frontmatter { path, source } => Self::InvalidFrontmatter {
                path,
                detail: source.to_string(),
            },
            LoadError::Storage(e) => Self::Storage(e.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Not found", "path": path}),
            ),
            Self::InvalidFrontmatter { path, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Invalid frontmatter", "path": path, "detail": detail}),
            ),
            Self::Navigation(e) => {
                tracing::error!(error = %e, "Failed to build navigation");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e.to_string()}),
                )
            }
            Self::Storage(e) => {
                tracing::error!(error = %e, "Failed to read document");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": e}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
