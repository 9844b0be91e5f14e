//! Navigation tree builder.
//!
//! Mirrors the documentation directory as a sidebar tree. Directories become
//! branches, every other entry becomes a leaf link. Entries keep the order in
//! which storage lists them.
//!
//! # Example
//!
//! ```
//! use smu_docs_site::{NavNode, NavigationOptions, build_navigation};
//! use smu_docs_storage::MockStorage;
//!
//! let storage = MockStorage::new().with_file("getting-started.md", "");
//! let nav = build_navigation(&storage, &NavigationOptions::default(), "getting-started").unwrap();
//!
//! assert_eq!(nav, vec![NavNode::document("getting started", "/docs/getting-started", true)]);
//! ```

use serde::Serialize;
use smu_docs_storage::{Storage, StorageError, join_path};

/// Error building the navigation tree.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// A directory of the documentation tree could not be listed.
    #[error("Failed to list documentation directory: {0}")]
    Storage(#[from] StorageError),
}

/// Sidebar entry for one file or directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavNode {
    /// Display name: entry name without the document extension, `-` shown as spaces.
    pub name: String,
    /// Link target: url prefix plus the relative path without the extension.
    pub url: String,
    /// Branch or leaf payload.
    #[serde(flatten)]
    pub kind: NavKind,
}

/// Payload distinguishing directories from documents.
///
/// Serializes as either a `children` or an `isActive` field, never both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavKind {
    /// Directory with its entries in listing order.
    Directory { children: Vec<NavNode> },
    /// Document leaf.
    Document {
        #[serde(rename = "isActive")]
        is_active: bool,
    },
}

impl NavNode {
    /// Create a directory node.
    #[must_use]
    pub fn directory(name: impl Into<String>, url: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind: NavKind::Directory { children },
        }
    }

    /// Create a document leaf.
    #[must_use]
    pub fn document(name: impl Into<String>, url: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind: NavKind::Document { is_active },
        }
    }

    /// Child nodes, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        match &self.kind {
            NavKind::Directory { children } => children,
            NavKind::Document { .. } => &[],
        }
    }

    /// Whether this is the leaf for the requested page.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.kind, NavKind::Document { is_active: true })
    }
}

/// How relative paths map to names and urls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Url path the documentation root is served under (e.g. `/docs`).
    pub url_prefix: String,
    /// Document file extension without the dot (e.g. `md`).
    pub extension: String,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            url_prefix: "/docs".to_owned(),
            extension: "md".to_owned(),
        }
    }
}

impl NavigationOptions {
    fn strip_extension<'a>(&self, name: &'a str) -> &'a str {
        name.strip_suffix(&self.extension)
            .and_then(|stem| stem.strip_suffix('.'))
            .unwrap_or(name)
    }

    fn url(&self, relative: &str) -> String {
        format!(
            "{}/{}",
            self.url_prefix.trim_end_matches('/'),
            self.strip_extension(relative)
        )
    }
}

/// Build the navigation tree for the documentation root.
///
/// # Arguments
///
/// * `storage` - Documentation tree to list
/// * `options` - Url prefix and document extension
/// * `requested` - Slug of the page being viewed, without extension
///
/// # Errors
///
/// Returns [`NavigationError::Storage`] if the root or any nested directory
/// cannot be listed.
pub fn build_navigation(
    storage: &dyn Storage,
    options: &NavigationOptions,
    requested: &str,
) -> Result<Vec<NavNode>, NavigationError> {
    let active_path = format!("{requested}.{}", options.extension);
    let nodes = build_level(storage, options, "", &active_path)?;
    tracing::debug!(requested, count = nodes.len(), "Built navigation");
    Ok(nodes)
}

fn build_level(
    storage: &dyn Storage,
    options: &NavigationOptions,
    dir: &str,
    active_path: &str,
) -> Result<Vec<NavNode>, NavigationError> {
    storage
        .list(dir)?
        .into_iter()
        .map(|entry| {
            let relative = join_path(dir, &entry.name);
            let name = options.strip_extension(&entry.name).replace('-', " ");
            let url = options.url(&relative);

            if entry.is_dir() {
                let children = build_level(storage, options, &relative, active_path)?;
                Ok(NavNode::directory(name, url, children))
            } else {
                Ok(NavNode::document(name, url, relative == active_path))
            }
        })
        .collect()
}

/// Breadcrumb labels for a slug: one per path segment, `-` shown as spaces.
#[must_use]
pub fn breadcrumbs(slug: &str) -> Vec<String> {
    slug.split('/')
        .filter(|part| !part.is_empty())
        .map(|part| part.replace('-', " "))
        .collect()
}
