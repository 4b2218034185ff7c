//! Override persistence: two named collections of distinct phrases.
//!
//! Two interchangeable backends, selected at startup via configuration: a
//! SQLite table pair reconciled by diff, and a flat JSON file rewritten
//! whole. The store is the single source of truth; every request runs its
//! own load/mutate/save cycle against it.

mod file;
mod sqlite;

pub use file::FileStore;
pub use sqlite::SqliteStore;

use crate::config::{StoreBackend, StoreConfig};
use crate::error::HonorError;
use crate::memory::MemoryState;
use std::time::Duration;

/// The configured backend behind one front door.
pub enum HonorStore {
    Sqlite(SqliteStore),
    File(FileStore),
}

impl HonorStore {
    /// Open the backend named by the configuration.
    pub fn open(config: &StoreConfig) -> Result<Self, HonorError> {
        match config.backend {
            StoreBackend::Sqlite => Ok(Self::Sqlite(SqliteStore::open(
                &config.db_path,
                Duration::from_millis(config.busy_timeout_ms),
            )?)),
            StoreBackend::File => Ok(Self::File(FileStore::open(&config.file_path)?)),
        }
    }

    /// Fetch both sets from the backing store.
    pub fn load(&self) -> Result<MemoryState, HonorError> {
        match self {
            Self::Sqlite(store) => store.load(),
            Self::File(store) => store.load(),
        }
    }

    /// Persist the full state.
    pub fn save(&self, state: &MemoryState) -> Result<(), HonorError> {
        match self {
            Self::Sqlite(store) => store.save(state),
            Self::File(store) => store.save(state),
        }
    }

    /// Run one load/mutate/save unit of work.
    ///
    /// The whole cycle happens under the backend's write lock (SQLite: a
    /// single immediate transaction), so two concurrent mutations cannot
    /// clobber each other's sets.
    pub fn update<R>(&self, mutate: impl FnOnce(&mut MemoryState) -> R) -> Result<R, HonorError> {
        match self {
            Self::Sqlite(store) => store.update(mutate),
            Self::File(store) => store.update(mutate),
        }
    }

    /// Short backend name for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::File(_) => "file",
        }
    }
}
