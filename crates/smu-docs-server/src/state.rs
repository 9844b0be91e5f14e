//! Application state.
//!
//! Shared state for all request handlers.

use smu_docs_site::DocsSite;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Navigation and document loading over the documentation root.
    pub(crate) site: DocsSite,
}
