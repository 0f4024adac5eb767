//! Drawing surface and frame output configuration.

use serde::{Deserialize, Serialize};

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 320,
        }
    }
}

/// Where and how often animated frames are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Frames per second for `animate` (valid range: 1-240).
    pub fps: u32,
    /// Directory receiving `frame-NNNNN.png` files.
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            directory: "frames".into(),
        }
    }
}
