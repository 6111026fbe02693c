//! JSON document store
//!
//! Each collection (admins, students, books, issues) lives as one JSON array
//! file under the data directory. The store is an injected handle: every
//! repository holds a clone, and tests point it at a temp directory.
//!
//! A per-collection async mutex serializes read-modify-write cycles so two
//! concurrent requests cannot drop each other's updates.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::models::{admin::Admin, book::Book, student::Student};

/// Named on-disk collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Admins,
    Students,
    Books,
    Issues,
}

impl Collection {
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Admins => "admins.json",
            Collection::Students => "students.json",
            Collection::Books => "books.json",
            Collection::Issues => "issues.json",
        }
    }

    fn index(self) -> usize {
        match self {
            Collection::Admins => 0,
            Collection::Students => 1,
            Collection::Books => 2,
            Collection::Issues => 3,
        }
    }
}

/// Storage error distinguishing unreadable files from corrupt documents
///
/// An absent file is not an error: it reads as an empty collection. A file
/// that exists but fails to parse is surfaced instead of silently erasing
/// apparent state.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("collection {collection} is corrupt: {source}")]
    Corrupt {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

struct StoreInner {
    data_dir: PathBuf,
    locks: [Mutex<()>; 4],
}

/// Handle to the on-disk JSON collections
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Open the data directory, creating it and seeding default collections
    /// on first run. Existing files are never overwritten.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref().to_path_buf();

        std::fs::create_dir_all(&data_dir).map_err(|source| StoreError::Io {
            path: data_dir.clone(),
            source,
        })?;

        let store = Self {
            inner: Arc::new(StoreInner {
                data_dir,
                locks: [Mutex::new(()), Mutex::new(()), Mutex::new(()), Mutex::new(())],
            }),
        };

        store.seed_defaults()?;
        Ok(store)
    }

    /// Acquire the write lock for a collection
    ///
    /// Callers performing a read-modify-write cycle must hold the guard for
    /// the whole cycle. When two collections are involved, acquire guards in
    /// `Collection` declaration order to avoid deadlocks.
    pub async fn lock(&self, collection: Collection) -> MutexGuard<'_, ()> {
        self.inner.locks[collection.index()].lock().await
    }

    /// Read a whole collection
    ///
    /// Absent or empty files read as an empty collection; corrupt files are
    /// surfaced as [`StoreError::Corrupt`].
    pub fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError> {
        let path = self.path(collection);

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            collection: collection.file_name(),
            source,
        })
    }

    /// Serialize the full collection back, overwriting the file
    pub fn write<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), StoreError> {
        let path = self.path(collection);

        let raw = serde_json::to_string_pretty(records).map_err(|source| StoreError::Corrupt {
            collection: collection.file_name(),
            source,
        })?;

        std::fs::write(&path, raw).map_err(|source| StoreError::Io { path, source })
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.inner.data_dir.join(collection.file_name())
    }

    /// Create any missing collection file with its default contents
    fn seed_defaults(&self) -> Result<(), StoreError> {
        if !self.path(Collection::Admins).exists() {
            tracing::info!("Seeding default admins");
            self.write(
                Collection::Admins,
                &[Admin {
                    email: "admin@lms.edu".to_string(),
                    password: "123".to_string(),
                    name: "Super Admin".to_string(),
                }],
            )?;
        }

        if !self.path(Collection::Students).exists() {
            tracing::info!("Seeding default students");
            self.write(
                Collection::Students,
                &[Student {
                    id: "233016112".to_string(),
                    password: "pass123".to_string(),
                    name: "John Doe".to_string(),
                    email: "john@student.edu".to_string(),
                    date: None,
                }],
            )?;
        }

        if !self.path(Collection::Books).exists() {
            tracing::info!("Seeding default books");
            self.write(
                Collection::Books,
                &[
                    Book {
                        id: Uuid::new_v4(),
                        title: "The Martian".to_string(),
                        author: "Andy Weir".to_string(),
                        isbn: "978-01314290".to_string(),
                        quantity: 10,
                        available: 10,
                    },
                    Book {
                        id: Uuid::new_v4(),
                        title: "Deep Learning".to_string(),
                        author: "Ian Goodfellow".to_string(),
                        isbn: "978-01314291".to_string(),
                        quantity: 5,
                        available: 5,
                    },
                ],
            )?;
        }

        if !self.path(Collection::Issues).exists() {
            self.write::<crate::models::issue::Issue>(Collection::Issues, &[])?;
        }

        Ok(())
    }
}
