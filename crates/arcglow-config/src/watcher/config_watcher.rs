//! Debounced watcher for a single config file.

use arcglow_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Editors often save by write + rename; coalesce the burst into one signal.
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a config file for changes and sends notifications.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch the config file, sending `()` on `tx` after each debounced burst
    /// of modifications. Runs until the underlying notify channel closes.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name: OsString = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        // Bridge the sync notify callback into async
        let (notify_tx, mut notify_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    let touches_config = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().is_some_and(|n| n == file_name));
                    if touches_config {
                        debug!("config file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        // `watcher` must stay alive for the rest of this function.
        while notify_rx.recv().await.is_some() {
            let debounce = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(debounce);

            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("config file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}
