//! Layout API endpoint.
//!
//! Returns breadcrumbs and the navigation tree with the requested page marked
//! active.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use smu_docs_site::Layout;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/layout/ (no page selected).
pub(crate) async fn get_root_layout(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Layout>, ServerError> {
    Ok(Json(state.site.layout("")?))
}

/// Handle GET /api/layout/{slug}.
pub(crate) async fn get_layout(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Layout>, ServerError> {
    Ok(Json(state.site.layout(&slug)?))
}
