//! Site facade combining navigation and document loading.

use std::sync::Arc;

use serde::Serialize;
use smu_docs_storage::{Storage, join_path};

use crate::loader::{DocumentLoader, LoadError, ParsedDocument};
use crate::navigation::{NavNode, NavigationError, NavigationOptions, breadcrumbs, build_navigation};

/// Site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Url path the documentation root is served under.
    pub url_prefix: String,
    /// Document file extension without the dot.
    pub extension: String,
    /// Whether fenced code blocks are syntax highlighted.
    pub highlight: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let options = NavigationOptions::default();
        Self {
            url_prefix: options.url_prefix,
            extension: options.extension,
            highlight: true,
        }
    }
}

/// Shell data for a page: breadcrumbs and the sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Breadcrumb labels of the requested slug.
    pub crumbs: Vec<String>,
    /// Navigation tree with the requested page marked active.
    pub structure: Vec<NavNode>,
}

/// Documentation site over one storage root.
///
/// Holds no per-request state: every call reads storage afresh, so a shared
/// `Arc<DocsSite>` can serve concurrent requests.
pub struct DocsSite {
    storage: Arc<dyn Storage>,
    navigation: NavigationOptions,
    loader: DocumentLoader,
}

impl DocsSite {
    /// Create a site over the given storage.
    pub fn new(storage: Arc<dyn Storage>, config: SiteConfig) -> Self {
        let loader = DocumentLoader::new(Arc::clone(&storage), config.extension.clone())
            .with_highlighting(config.highlight);
        Self {
            storage,
            navigation: NavigationOptions {
                url_prefix: config.url_prefix,
                extension: config.extension,
            },
            loader,
        }
    }

    /// Breadcrumbs and navigation for a requested slug.
    pub fn layout(&self, slug: &str) -> Result<Layout, NavigationError> {
        Ok(Layout {
            crumbs: breadcrumbs(slug),
            structure: build_navigation(self.storage.as_ref(), &self.navigation, slug)?,
        })
    }

    /// Load the document for a slug.
    pub fn load(&self, slug: &str) -> Result<ParsedDocument, LoadError> {
        self.loader.load(slug)
    }

    /// Slugs of every document under the root, in listing order.
    ///
    /// Only files carrying the document extension count.
    pub fn documents(&self) -> Result<Vec<String>, NavigationError> {
        let mut slugs = Vec::new();
        self.collect_documents("", &mut slugs)?;
        Ok(slugs)
    }

    fn collect_documents(&self, dir: &str, slugs: &mut Vec<String>) -> Result<(), NavigationError> {
        let suffix = format!(".{}", self.navigation.extension);
        for entry in self.storage.list(dir)? {
            let relative = join_path(dir, &entry.name);
            if entry.is_dir() {
                self.collect_documents(&relative, slugs)?;
            } else if let Some(slug) = relative.strip_suffix(&suffix) {
                slugs.push(slug.to_owned());
            }
        }
        Ok(())
    }
}
