//! Storage abstraction for the smu documentation engine.
//!
//! This crate provides a [`Storage`] trait for listing and reading the
//! documentation source tree. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Explicit roots** passed at construction instead of process-wide constants
//! - **Clean separation** between navigation/loading logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `list()`, `read()`, and `is_file()` methods
//! - [`FsStorage`] implementation for a directory on the local filesystem
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use smu_docs_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! for entry in storage.list("guides")? {
//!     println!("{} ({:?})", entry.name, entry.kind);
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Entry, EntryKind, Storage, StorageError, StorageErrorKind, join_path};
