//! Health check endpoint.

/// Handle GET /health.
pub(crate) async fn get_health() -> &'static str {
    "ok"
}
