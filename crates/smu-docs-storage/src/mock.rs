//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::{Entry, Storage, StorageError, StorageErrorKind, join_path};

/// Mock storage for testing.
///
/// Keeps a directory tree in memory. Entries are listed in insertion order,
/// which lets tests control the listing order exactly.
///
/// # Example
///
/// ```ignore
/// use smu_docs_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("guides/install.md", "---\ntitle: Install\n---\n# Hello");
///
/// let entries = storage.list("guides").unwrap();
/// let content = storage.read("guides/install.md").unwrap();
/// ```
#[derive(Debug)]
pub struct MockStorage {
    /// Directory path -> entries in insertion order. The root is `""`.
    dirs: RwLock<HashMap<String, Vec<Entry>>>,
    contents: RwLock<HashMap<String, String>>,
}

impl Default for MockStorage {
    fn default() -> Self {
        Self {
            dirs: RwLock::new(HashMap::from([(String::new(), Vec::new())])),
            contents: RwLock::new(HashMap::new()),
        }
    }
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory (and any missing ancestors).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_dir(self, path: &str) -> Self {
        self.ensure_dir(path);
        self
    }

    /// Add a file with content (and any missing ancestor directories).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: &str, content: impl Into<String>) -> Self {
        let (dir, name) = split_path(path);
        self.ensure_dir(dir);
        self.dirs
            .write()
            .unwrap()
            .entry(dir.to_owned())
            .or_default()
            .push(Entry::file(name));
        self.contents
            .write()
            .unwrap()
            .insert(path.to_owned(), content.into());
        self
    }

    fn ensure_dir(&self, path: &str) {
        let mut dirs = self.dirs.write().unwrap();
        let mut current = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let next = join_path(&current, segment);
            if !dirs.contains_key(&next) {
                dirs.entry(current.clone())
                    .or_default()
                    .push(Entry::directory(segment));
                dirs.insert(next.clone(), Vec::new());
            }
            current = next;
        }
    }
}

/// Split a relative path into parent directory and last segment.
fn split_path(path: &str) -> (&str, &str) {
    path.rsplit_once('/').unwrap_or(("", path))
}

impl Storage for MockStorage {
    fn list(&self, dir: &str) -> Result<Vec<Entry>, StorageError> {
        self.dirs.read().unwrap().get(dir).cloned().ok_or_else(|| {
            StorageError::new(StorageErrorKind::NotFound)
                .with_path(dir)
                .with_backend("Mock")
        })
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        self.contents
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::NotFound)
                    .with_path(path)
                    .with_backend("Mock")
            })
    }

    fn is_file(&self, path: &str) -> bool {
        self.contents.read().unwrap().contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_root_lists_nothing() {
        let storage = MockStorage::new();

        assert!(storage.list("").unwrap().is_empty());
    }

    #[test]
    fn test_with_file_creates_ancestors() {
        let storage = MockStorage::new().with_file("a/b/page.md", "text");

        assert_eq!(storage.list("").unwrap(), vec![Entry::directory("a")]);
        assert_eq!(storage.list("a").unwrap(), vec![Entry::directory("b")]);
        assert_eq!(storage.list("a/b").unwrap(), vec![Entry::file("page.md")]);
        assert_eq!(storage.read("a/b/page.md").unwrap(), "text");
    }

    #[test]
    fn test_insertion_order_is_listing_order() {
        let storage = MockStorage::new()
            .with_file("zeta.md", "")
            .with_dir("guides")
            .with_file("alpha.md", "");

        let names: Vec<_> = storage.list("").unwrap().into_iter().map(|e| e.name).collect();

        assert_eq!(names, vec!["zeta.md", "guides", "alpha.md"]);
    }

    #[test]
    fn test_directory_registered_once() {
        let storage = MockStorage::new()
            .with_file("guides/one.md", "")
            .with_file("guides/two.md", "");

        assert_eq!(storage.list("").unwrap().len(), 1);
        assert_eq!(storage.list("guides").unwrap().len(), 2);
    }

    #[test]
    fn test_missing_dir_and_file() {
        let storage = MockStorage::new();

        assert_eq!(
            storage.list("missing").unwrap_err().kind(),
            &StorageErrorKind::NotFound
        );
        assert_eq!(
            storage.read("missing.md").unwrap_err().kind(),
            &StorageErrorKind::NotFound
        );
        assert!(!storage.is_file("missing.md"));
    }
}
