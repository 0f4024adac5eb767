//! Base palette configuration.

use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_PALETTE_HEX;

/// Ordered base colors, as `#RRGGBB` strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteConfig {
    pub colors: Vec<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE_HEX.iter().map(|s| s.to_string()).collect(),
        }
    }
}
