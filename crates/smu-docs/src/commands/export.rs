//! `smu-docs export` command implementation.
//!
//! Prerenders every document to `<out>/<slug>.json` holding the page layout
//! and the loaded page, the same data the server returns per request.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use smu_docs_config::CliSettings;
use smu_docs_site::{DocsSite, Layout, ParsedDocument};

use super::{SiteArgs, open_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Output directory for the exported pages.
    #[arg(short, long)]
    out: PathBuf,
}

/// One exported page.
#[derive(Serialize)]
struct ExportedPage {
    layout: Layout,
    page: ParsedDocument,
}

impl ExportArgs {
    /// Execute the export command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config(CliSettings::default())?;
        let site = open_site(&config);

        output.info(&format!(
            "Source: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!("Output: {}", self.out.display()));

        let count = export_site(&site, &self.out)?;

        output.success(&format!(
            "Exported {count} pages to {}",
            self.out.display()
        ));
        Ok(())
    }
}

/// Write one JSON file per document. Returns the number of pages written.
///
/// Stops at the first document that fails to load.
fn export_site(site: &DocsSite, out: &Path) -> Result<usize, CliError> {
    let slugs = site.documents()?;

    for slug in &slugs {
        let exported = ExportedPage {
            layout: site.layout(slug)?,
            page: site.load(slug)?,
        };

        let target = out.join(format!("{slug}.json"));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, serde_json::to_string_pretty(&exported)?)?;
        tracing::debug!(slug = %slug, target = %target.display(), "Exported page");
    }

    Ok(slugs.len())
}
