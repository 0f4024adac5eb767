//! Tests for the config file watcher.

use super::*;
use std::path::PathBuf;

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    // Watcher should be created even if the file doesn't exist yet
    let watcher = ConfigWatcher::new(PathBuf::from("/tmp/nonexistent_arcglow_test.toml"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_new_rejects_path_without_file_name() {
    let watcher = ConfigWatcher::new(PathBuf::from("/"));
    assert!(matches!(
        watcher,
        Err(arcglow_common::ConfigError::WatchError(_))
    ));
}

#[test]
fn watcher_keeps_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# test").unwrap();

    let watcher = ConfigWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}
