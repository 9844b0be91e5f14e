//! HTTP server for smu documentation.
//!
//! This crate provides an axum server exposing the documentation site as
//! JSON for the frontend:
//!
//! - `GET /api/layout/{slug}`: breadcrumbs and navigation tree
//! - `GET /api/pages/{slug}`: frontmatter, raw source and rendered HTML
//! - `GET /health`: liveness probe
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use smu_docs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         source_dir: PathBuf::from("docs"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use smu_docs_site::{DocsSite, SiteConfig};
use smu_docs_storage::FsStorage;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Documentation source directory.
    pub source_dir: PathBuf,
    /// Url path the documentation root is served under.
    pub url_prefix: String,
    /// Document file extension without the dot.
    pub extension: String,
    /// Whether fenced code blocks are syntax highlighted.
    pub highlight: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let site = SiteConfig::default();
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5173,
            source_dir: PathBuf::from("docs"),
            url_prefix: site.url_prefix,
            extension: site.extension,
            highlight: site.highlight,
        }
    }
}

impl ServerConfig {
    /// Site configuration for the documentation root.
    #[must_use]
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig {
            url_prefix: self.url_prefix.clone(),
            extension: self.extension.clone(),
            highlight: self.highlight,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storage = Arc::new(FsStorage::new(config.source_dir.clone()));
    let site = DocsSite::new(storage, config.site_config());
    let state = Arc::new(AppState { site });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        source_dir = %config.source_dir.display(),
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the loaded config file.
#[must_use]
pub fn server_config_from_config(config: &smu_docs_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        url_prefix: config.docs_resolved.url_prefix.clone(),
        extension: config.docs_resolved.extension.clone(),
        highlight: config.highlight.enabled,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_default_config() {
        let config = smu_docs_config::Config::default();

        let server = server_config_from_config(&config);

        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 5173);
        assert_eq!(server.url_prefix, "/docs");
        assert_eq!(server.extension, "md");
        assert!(server.highlight);
        assert_eq!(server.site_config(), SiteConfig::default());
    }
}
