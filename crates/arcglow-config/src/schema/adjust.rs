//! Global hue/saturation/lightness adjustment.

use serde::{Deserialize, Serialize};

use crate::defaults::{
    DEFAULT_HUE_OFFSET, DEFAULT_LIGHTNESS_PERCENT, DEFAULT_SATURATION_PERCENT,
};

/// Render-time HSL transform applied to every palette color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdjustConfig {
    /// Hue rotation in degrees; any integer, wraps modulo 360.
    pub hue_offset: i32,
    /// Saturation scale in percent (valid range: 0-200).
    pub saturation: i32,
    /// Lightness scale in percent (valid range: 0-200).
    pub lightness: i32,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            hue_offset: DEFAULT_HUE_OFFSET,
            saturation: DEFAULT_SATURATION_PERCENT,
            lightness: DEFAULT_LIGHTNESS_PERCENT,
        }
    }
}
