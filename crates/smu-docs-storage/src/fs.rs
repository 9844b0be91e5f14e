//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading the documentation tree from a directory
//! on the local filesystem.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::storage::{Entry, EntryKind, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Lists directories in the order reported by the operating system. No
/// sorting or filtering is applied, so the navigation tree mirrors the
/// directory exactly.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use smu_docs_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("docs"));
/// let text = storage.read("guides/install.md")?;
/// ```
#[derive(Clone, Debug)]
pub struct FsStorage {
    /// Root directory for document storage.
    source_dir: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Root directory of this storage.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Resolve a relative source path to an absolute filesystem path.
    ///
    /// Rejects parent directory components (`..`) and absolute paths so that
    /// requests cannot escape the source directory.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path);
        let escapes = relative.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(relative)
                .with_backend(BACKEND));
        }
        Ok(self.source_dir.join(relative))
    }
}

impl Storage for FsStorage {
    fn list(&self, dir: &str) -> Result<Vec<Entry>, StorageError> {
        let dir_path = self.resolve(dir)?;
        let read_dir = fs::read_dir(&dir_path)
            .map_err(|e| StorageError::io(e, Some(dir_path.clone())).with_backend(BACKEND))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry =
                entry.map_err(|e| StorageError::io(e, Some(dir_path.clone())).with_backend(BACKEND))?;
            let path = entry.path();
            // Follow symlinks so a linked directory is listed as a directory.
            let metadata = fs::metadata(&path)
                .map_err(|e| StorageError::io(e, Some(path.clone())).with_backend(BACKEND))?;
            let kind = if metadata.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        tracing::trace!(dir = %dir_path.display(), count = entries.len(), "Listed directory");
        Ok(entries)
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        let file_path = self.resolve(path)?;
        fs::read_to_string(&file_path)
            .map_err(|e| StorageError::io(e, Some(file_path)).with_backend(BACKEND))
    }

    fn is_file(&self, path: &str) -> bool {
        self.resolve(path)
            .ok()
            .and_then(|p| fs::metadata(p).ok())
            .is_some_and(|m| m.is_file())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn create_storage() -> (tempfile::TempDir, FsStorage) {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        (temp_dir, storage)
    }

    #[test]
    fn test_list_empty_dir() {
        let (_temp_dir, storage) = create_storage();

        let entries = storage.list("").unwrap();

        assert!(entries.is_empty());
    }

    #[test]
    fn test_list_reports_kinds() {
        let (temp_dir, storage) = create_storage();
        fs::create_dir(temp_dir.path().join("guides")).unwrap();
        fs::write(temp_dir.path().join("intro.md"), "---\ntitle: Intro\n---\n").unwrap();

        let entries: HashSet<_> = storage
            .list("")
            .unwrap()
            .into_iter()
            .map(|e| (e.name, e.kind))
            .collect();

        assert_eq!(
            entries,
            HashSet::from([
                ("guides".to_owned(), EntryKind::Directory),
                ("intro.md".to_owned(), EntryKind::File),
            ])
        );
    }

    #[test]
    fn test_list_matches_read_dir_order() {
        let (temp_dir, storage) = create_storage();
        for name in ["zeta.md", "alpha.md", "mid.md", "beta"] {
            fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let expected: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        let actual: Vec<String> = storage
            .list("")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_list_missing_dir_is_not_found() {
        let (_temp_dir, storage) = create_storage();

        let err = storage.list("missing").unwrap_err();

        assert_eq!(err.kind(), &StorageErrorKind::NotFound);
        assert_eq!(err.backend(), Some("Fs"));
    }

    #[test]
    fn test_list_missing_root_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp_dir.path().join("nonexistent"));

        let err = storage.list("").unwrap_err();

        assert_eq!(err.kind(), &StorageErrorKind::NotFound);
    }

    #[test]
    fn test_read_file() {
        let (temp_dir, storage) = create_storage();
        fs::create_dir(temp_dir.path().join("guides")).unwrap();
        fs::write(temp_dir.path().join("guides/install.md"), "# Install\n").unwrap();

        assert_eq!(storage.read("guides/install.md").unwrap(), "# Install\n");
    }

    #[test]
    fn test_read_rejects_parent_dir() {
        let (_temp_dir, storage) = create_storage();

        let err = storage.read("../etc/passwd").unwrap_err();

        assert_eq!(err.kind(), &StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_read_rejects_absolute_path() {
        let (_temp_dir, storage) = create_storage();

        let err = storage.read("/etc/passwd").unwrap_err();

        assert_eq!(err.kind(), &StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_is_file() {
        let (temp_dir, storage) = create_storage();
        fs::create_dir(temp_dir.path().join("guides")).unwrap();
        fs::write(temp_dir.path().join("guides/install.md"), "").unwrap();

        assert!(storage.is_file("guides/install.md"));
        assert!(!storage.is_file("guides"));
        assert!(!storage.is_file("guides/missing.md"));
        assert!(!storage.is_file("../guides/install.md"));
    }
}
