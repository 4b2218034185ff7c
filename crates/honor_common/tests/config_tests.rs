//! Tests for config parsing and defaults.

use honor_common::config::{HonordConfig, StoreBackend};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = HonordConfig::load(Path::new("/nonexistent/honord.toml")).unwrap();
    assert_eq!(config.listen_addr, "127.0.0.1:7860");
    assert_eq!(config.request_timeout_secs, 10);
    assert_eq!(config.store.backend, StoreBackend::Sqlite);
}

#[test]
fn test_partial_file_keeps_field_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("honord.toml");
    std::fs::write(
        &path,
        "listen_addr = \"0.0.0.0:9000\"\n\n[store]\nbackend = \"file\"\n",
    )
    .unwrap();

    let config = HonordConfig::load(&path).unwrap();
    assert_eq!(config.listen_addr, "0.0.0.0:9000");
    assert_eq!(config.store.backend, StoreBackend::File);
    assert_eq!(config.request_timeout_secs, 10);
    assert_eq!(config.store.busy_timeout_ms, 5000);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("honord.toml");
    std::fs::write(&path, "listen_addr = [").unwrap();

    assert!(HonordConfig::load(&path).is_err());
}
