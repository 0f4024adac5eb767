//! Tests for the reload manager.

use super::*;
use std::path::PathBuf;
use std::time::Duration;

#[tokio::test]
async fn start_with_nonexistent_path_uses_defaults() {
    let path = PathBuf::from("/tmp/nonexistent_arcglow_reload_test.toml");
    let (config, rx) = ReloadManager::start(path);
    assert_eq!(config.animation.duration_ms, 9000);
    assert_eq!(rx.borrow().palette.colors.len(), 8);
}

#[tokio::test]
async fn start_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[animation]\nduration_ms = 6000\n").unwrap();

    let (config, rx) = ReloadManager::start(path);
    assert_eq!(config.animation.duration_ms, 6000);
    assert_eq!(rx.borrow().animation.duration_ms, 6000);
    assert_eq!(config.adjust.lightness, 100); // default
}

#[test]
fn reload_config_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[palette\n").unwrap();

    let err = reload_config(&path).unwrap_err();
    assert!(matches!(err, arcglow_common::ConfigError::ParseError(_)));
}

#[test]
fn reload_config_reads_latest_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[adjust]\nhue_offset = 10\n").unwrap();
    assert_eq!(reload_config(&path).unwrap().adjust.hue_offset, 10);

    std::fs::write(&path, "[adjust]\nhue_offset = 200\n").unwrap();
    assert_eq!(reload_config(&path).unwrap().adjust.hue_offset, 200);
}

/// Give the spawned watcher time to register with the OS before editing.
async fn let_watcher_settle() {
    tokio::time::sleep(Duration::from_millis(300)).await;
}

#[tokio::test]
async fn file_edit_is_published_on_channel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[animation]\nduration_ms = 6000\n").unwrap();

    let (_, mut rx) = ReloadManager::start(path.clone());
    let_watcher_settle().await;
    std::fs::write(&path, "[animation]\nduration_ms = 12000\n").unwrap();

    tokio::time::timeout(Duration::from_secs(10), rx.changed())
        .await
        .expect("no reload published")
        .unwrap();
    assert_eq!(rx.borrow_and_update().animation.duration_ms, 12000);
}

#[tokio::test]
async fn malformed_edit_publishes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[animation]\nduration_ms = 6000\n").unwrap();

    let (_, mut rx) = ReloadManager::start(path.clone());
    let_watcher_settle().await;
    std::fs::write(&path, "[animation\nduration_ms = 3000\n").unwrap();

    // Debounce is 500ms; wait well past it.
    let published = tokio::time::timeout(Duration::from_secs(2), rx.changed()).await;
    assert!(published.is_err());
    assert_eq!(rx.borrow().animation.duration_ms, 6000);

    // The watcher survives the bad edit.
    std::fs::write(&path, "[animation]\nduration_ms = 3000\n").unwrap();
    tokio::time::timeout(Duration::from_secs(10), rx.changed())
        .await
        .expect("no reload published")
        .unwrap();
    assert_eq!(rx.borrow_and_update().animation.duration_ms, 3000);
}
