//! Navigation and page loading for the smu documentation site.
//!
//! This crate provides:
//! - [`build_navigation`]: sidebar tree mirroring the documentation directory
//! - [`DocumentLoader`]: slug to validated frontmatter, raw text and HTML
//! - [`DocsSite`]: both of the above over one storage root
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use smu_docs_site::{DocsSite, SiteConfig};
//! use smu_docs_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("docs")));
//! let site = DocsSite::new(storage, SiteConfig::default());
//!
//! let layout = site.layout("guides/install")?;
//! let page = site.load("guides/install")?;
//! println!("{} ({} nav entries)", page.frontmatter.title, layout.structure.len());
//! # Ok(())
//! # }
//! ```

mod frontmatter;
mod loader;
mod navigation;
mod site;

pub use frontmatter::{Frontmatter, FrontmatterError};
pub use loader::{DocumentLoader, LoadError, ParsedDocument};
pub use navigation::{
    NavKind, NavNode, NavigationError, NavigationOptions, breadcrumbs, build_navigation,
};
pub use site::{DocsSite, Layout, SiteConfig};
