//! Flat-file override store: one JSON document holding both sets.
//!
//! Saves rewrite the whole document through a temp file in the same
//! directory followed by a rename, so readers never observe a torn write.

use crate::error::HonorError;
use crate::memory::MemoryState;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

pub struct FileStore {
    path: PathBuf,
    // Serializes the read-modify-write cycle within this process.
    guard: Mutex<()>,
}

impl FileStore {
    /// Open the store, creating an empty document if none exists.
    pub fn open(path: &Path) -> Result<Self, HonorError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            write_state(path, &MemoryState::default())?;
        }
        Ok(Self {
            path: path.to_path_buf(),
            guard: Mutex::new(()),
        })
    }

    pub fn load(&self) -> Result<MemoryState, HonorError> {
        let _guard = self.guard.lock().unwrap();
        read_state(&self.path)
    }

    pub fn save(&self, state: &MemoryState) -> Result<(), HonorError> {
        let _guard = self.guard.lock().unwrap();
        write_state(&self.path, state)
    }

    /// Load, mutate and save while holding the store lock.
    pub fn update<R>(&self, mutate: impl FnOnce(&mut MemoryState) -> R) -> Result<R, HonorError> {
        let _guard = self.guard.lock().unwrap();
        let mut state = read_state(&self.path)?;
        let out = mutate(&mut state);
        write_state(&self.path, &state)?;
        Ok(out)
    }
}

fn read_state(path: &Path) -> Result<MemoryState, HonorError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_state(path: &Path, state: &MemoryState) -> Result<(), HonorError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(tmp.as_file(), state)?;
    tmp.persist(path)
        .map_err(|err| HonorError::StoreUnavailable(err.to_string()))?;
    Ok(())
}
