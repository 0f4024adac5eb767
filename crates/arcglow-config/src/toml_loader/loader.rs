//! Core TOML config loading: read from a path, creating it if absent.

use crate::schema::ArcglowConfig;
use crate::validation;
use arcglow_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::create_default_config;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is. The render-time
/// setters apply their own fallbacks to out-of-range values.
pub fn load_from_path(path: &Path) -> Result<ArcglowConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ArcglowConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e} (using parsed config with fallbacks)");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, writing the default template there first if absent.
pub fn load_or_create(path: &Path) -> Result<ArcglowConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(ArcglowConfig::default())
        }
        Err(e) => Err(e),
    }
}
