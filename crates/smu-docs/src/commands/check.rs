//! `smu-docs check` command implementation.
//!
//! Loads every document and reports the ones that fail.

use clap::Args;
use smu_docs_config::CliSettings;
use smu_docs_site::{DocsSite, LoadError};

use super::{SiteArgs, open_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,
}

/// Outcome of checking all documents.
#[derive(Debug, Default)]
struct CheckReport {
    /// Number of documents checked.
    checked: usize,
    /// Documents that failed to load, with the reason.
    failures: Vec<(String, LoadError)>,
    /// Renderer warnings per document.
    warnings: Vec<(String, String)>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Validation` if any document fails to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config(CliSettings::default())?;
        let report = check_site(&open_site(&config))?;

        for (slug, warning) in &report.warnings {
            output.warning(&format!("{slug}: {warning}"));
        }
        for (slug, err) in &report.failures {
            output.error(&format!("{slug}: {err}"));
        }

        if report.failures.is_empty() {
            output.success(&format!("{} documents OK", report.checked));
            Ok(())
        } else {
            Err(CliError::Validation(format!(
                "{} of {} documents failed",
                report.failures.len(),
                report.checked
            )))
        }
    }
}

fn check_site(site: &DocsSite) -> Result<CheckReport, CliError> {
    let mut report = CheckReport::default();

    for slug in site.documents()? {
        report.checked += 1;
        match site.load(&slug) {
            Ok(doc) => report
                .warnings
                .extend(doc.warnings.into_iter().map(|w| (slug.clone(), w))),
            Err(e) => report.failures.push((slug, e)),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use smu_docs_site::{FrontmatterError, SiteConfig};
    use smu_docs_storage::FsStorage;

    use super::*;

    #[test]
    fn test_check_reports_failures_and_warnings() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.md"), "---\ntitle: Good\n---\nFine\n").unwrap();
        std::fs::write(dir.path().join("untitled.md"), "---\norder: 1\n---\nBody\n").unwrap();
        std::fs::write(
            dir.path().join("odd.md"),
            "---\ntitle: Odd\n---\n```no-such-language\nx\n```\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let site = DocsSite::new(
            Arc::new(FsStorage::new(dir.path().to_path_buf())),
            SiteConfig::default(),
        );

        let report = check_site(&site).unwrap();

        assert_eq!(report.checked, 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, "untitled");
        assert!(matches!(
            report.failures[0].1,
            LoadError::Frontmatter {
                source: FrontmatterError::MissingTitle,
                ..
            }
        ));
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].0, "odd");
    }
}
