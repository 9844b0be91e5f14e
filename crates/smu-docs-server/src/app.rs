//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/layout/", get(handlers::layout::get_root_layout))
        .route("/api/layout/{*slug}", get(handlers::layout::get_layout))
        .route("/api/pages/{*slug}", get(handlers::pages::get_page));

    Router::new()
        .merge(api_routes)
        .route("/health", get(handlers::health::get_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use smu_docs_site::{DocsSite, SiteConfig};
    use smu_docs_storage::MockStorage;
    use tower::ServiceExt;

    use super::*;

    const INSTALL: &str = "---\ntitle: Install\n---\n# Hello\n";

    fn router() -> Router {
        let storage = MockStorage::new()
            .with_file("getting-started.md", "---\ntitle: Getting started\n---\nWelcome\n")
            .with_file("guides/install.md", INSTALL)
            .with_file("guides/broken.md", "---\ndescription: no title\n---\n");
        let site = DocsSite::new(Arc::new(storage), SiteConfig::default());
        create_router(Arc::new(AppState { site }))
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("ok"));
    }

    #[tokio::test]
    async fn test_layout() {
        let (status, body) = get("/api/layout/guides/install").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "crumbs": ["guides", "install"],
                "structure": [
                    {"name": "getting started", "url": "/docs/getting-started", "isActive": false},
                    {"name": "guides", "url": "/docs/guides", "children": [
                        {"name": "install", "url": "/docs/guides/install", "isActive": true},
                        {"name": "broken", "url": "/docs/guides/broken", "isActive": false}
                    ]}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_root_layout_has_no_active_page() {
        let (status, body) = get("/api/layout/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["crumbs"], json!([]));
        assert_eq!(body["structure"][0]["isActive"], json!(false));
    }

    #[tokio::test]
    async fn test_page() {
        let (status, body) = get("/api/pages/guides/install").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "page": {
                    "frontmatter": {"title": "Install"},
                    "raw": INSTALL,
                    "content": "<h1>Hello</h1>"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_missing_page_is_404() {
        let (status, body) = get("/api/pages/guides/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found", "path": "guides/missing"}));
    }

    #[tokio::test]
    async fn test_invalid_frontmatter_is_500() {
        let (status, body) = get("/api/pages/guides/broken").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], json!("Invalid frontmatter"));
        assert_eq!(body["path"], json!("guides/broken.md"));
        assert!(body["detail"].as_str().unwrap().contains("title"));
    }
}
