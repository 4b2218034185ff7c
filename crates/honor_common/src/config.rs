//! Configuration for the honord daemon.
//!
//! Loads settings from a TOML file or falls back to defaults. A missing file
//! is fine; a malformed one is an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Which backing store holds the override sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Sqlite,
    File,
}

impl Default for StoreBackend {
    fn default() -> Self {
        Self::Sqlite
    }
}

/// Backing store settings. Both backends hold the same two named sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// SQLite database location.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Flat-file location (one JSON document with both sets).
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,

    /// How long a SQLite call may wait on a locked database.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            db_path: default_db_path(),
            file_path: default_file_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

/// Daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HonordConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Per-request deadline enforced at the HTTP layer.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub store: StoreConfig,
}

impl Default for HonordConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            request_timeout_secs: default_request_timeout_secs(),
            store: StoreConfig::default(),
        }
    }
}

impl HonordConfig {
    /// Load from the given path, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;
        Ok(config)
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:7860".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("honord")
}

fn default_db_path() -> PathBuf {
    data_dir().join("honor.db")
}

fn default_file_path() -> PathBuf {
    data_dir().join("honor.json")
}
