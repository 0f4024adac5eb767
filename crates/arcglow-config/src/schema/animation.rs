//! Animation timing configuration.

use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_DURATION_MS;

/// Animation cycle settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Length of one full palette rotation in milliseconds (valid range: 100-60000).
    pub duration_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}
