//! Pages API endpoint.
//!
//! Loads one document and returns its frontmatter, raw source and rendered
//! HTML.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use smu_docs_site::ParsedDocument;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/pages/{slug}.
#[derive(Serialize)]
pub(crate) struct PageResponse {
    /// The loaded document.
    page: ParsedDocument,
}

/// Handle GET /api/pages/{slug}.
pub(crate) async fn get_page(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, ServerError> {
    let page = state
        .site
        .load(&slug)
        .map_err(|e| ServerError::from_load(&slug, e))?;
    Ok(Json(PageResponse { page }))
}
