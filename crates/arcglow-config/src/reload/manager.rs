//! Core reload manager implementation.
//!
//! Contains the [`ReloadManager`] struct and its methods for loading,
//! watching, and reloading configuration from disk.

use crate::schema::ArcglowConfig;
use crate::toml_loader;
use crate::watcher::ConfigWatcher;
use arcglow_common::ConfigError;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new configs
/// via a [`tokio::sync::watch`] channel.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from the given path and start watching for changes.
    ///
    /// Returns the initial config and a watch receiver that will receive
    /// updated configs whenever the file changes on disk. A file that is
    /// missing or unparseable yields defaults; later edits are still picked up.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config_path: PathBuf) -> (ArcglowConfig, watch::Receiver<ArcglowConfig>) {
        let initial_config = match toml_loader::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                ArcglowConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        let manager = ReloadManager { config_path };
        tokio::spawn(async move {
            manager.run_watch_loop(config_tx).await;
        });

        (initial_config, config_rx)
    }

    /// Internal watch loop that reloads config on file changes.
    async fn run_watch_loop(&self, config_tx: watch::Sender<ArcglowConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match reload_config(&self.config_path) {
                        Ok(config) => {
                            if config_tx.send(config).is_err() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("config reload failed, keeping current settings: {e}");
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }
}

/// Re-read the config file. Validation problems are logged by the loader and
/// do not reject the file; parse errors do.
pub fn reload_config(path: &Path) -> Result<ArcglowConfig, ConfigError> {
    toml_loader::load_from_path(path)
}
