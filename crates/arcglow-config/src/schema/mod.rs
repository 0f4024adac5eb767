//! Configuration schema types for arcglow.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the same defaults the reset controls use.

mod adjust;
mod animation;
mod palette;
mod surface;
mod system;

pub use adjust::*;
pub use animation::*;
pub use palette::*;
pub use surface::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for arcglow.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArcglowConfig {
    pub animation: AnimationConfig,
    pub palette: PaletteConfig,
    pub adjust: AdjustConfig,
    pub surface: SurfaceConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_default_palette() {
        let config = ArcglowConfig::default();
        assert_eq!(config.palette.colors.len(), 8);
        assert_eq!(config.palette.colors[0], "#8B5CF6");
        assert_eq!(config.palette.colors[7], "#87CEFA");
    }

    #[test]
    fn default_config_has_default_timing_and_adjust() {
        let config = ArcglowConfig::default();
        assert_eq!(config.animation.duration_ms, 9000);
        assert_eq!(config.adjust.hue_offset, 0);
        assert_eq!(config.adjust.saturation, 100);
        assert_eq!(config.adjust.lightness, 100);
    }

    #[test]
    fn default_config_has_surface_and_output() {
        let config = ArcglowConfig::default();
        assert_eq!(config.surface.width, 1280);
        assert_eq!(config.surface.height, 320);
        assert_eq!(config.output.fps, 60);
        assert_eq!(config.output.directory, "frames");
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: ArcglowConfig = toml::from_str(
            r#"
[adjust]
hue_offset = -45
"#,
        )
        .unwrap();
        assert_eq!(config.adjust.hue_offset, -45);
        assert_eq!(config.adjust.saturation, 100);
        assert_eq!(config.animation.duration_ms, 9000);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: ArcglowConfig = toml::from_str("").unwrap();
        assert_eq!(config.palette, PaletteConfig::default());
        assert_eq!(config.surface, SurfaceConfig::default());
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: LoggingConfig = toml::from_str(r#"level = "DEBUG""#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.level.directive(), "arcglow=debug");
    }
}
