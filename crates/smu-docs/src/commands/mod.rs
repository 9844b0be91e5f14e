//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod serve;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use smu_docs_config::{CliSettings, Config};
use smu_docs_site::{DocsSite, SiteConfig};
use smu_docs_storage::FsStorage;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;

/// Options shared by commands that read the documentation tree.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover smu-docs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl SiteArgs {
    /// Load configuration, applying the source directory override.
    pub(crate) fn load_config(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            source_dir: self.source_dir.clone(),
            ..settings
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

/// Build a site over the configured documentation root.
pub(crate) fn open_site(config: &Config) -> DocsSite {
    let storage = Arc::new(FsStorage::new(config.docs_resolved.source_dir.clone()));
    DocsSite::new(
        storage,
        SiteConfig {
            url_prefix: config.docs_resolved.url_prefix.clone(),
            extension: config.docs_resolved.extension.clone(),
            highlight: config.highlight.enabled,
        },
    )
}
