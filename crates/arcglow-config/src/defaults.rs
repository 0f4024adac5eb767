//! Reset targets for every user-adjustable setting.

use arcglow_common::Color;

/// Palette restored by the "reset colors" control.
pub const DEFAULT_PALETTE_HEX: [&str; 8] = [
    "#8B5CF6", "#B464C8", "#DC2626", "#FA8072", "#FF9A66", "#FF8C50", "#3B82F6", "#87CEFA",
];

/// Cycle length restored by the "reset speed" control.
pub const DEFAULT_DURATION_MS: u32 = 9000;

/// Positions of the discrete speed selector, ascending.
pub const SPEED_PRESETS_MS: [u32; 5] = [3000, 6000, 9000, 12000, 15000];

pub const DEFAULT_HUE_OFFSET: i32 = 0;
pub const DEFAULT_SATURATION_PERCENT: i32 = 100;
pub const DEFAULT_LIGHTNESS_PERCENT: i32 = 100;

/// Largest accepted surface width or height, in pixels.
pub const MAX_SURFACE_DIM: u32 = 8192;

/// The default palette as parsed colors.
pub fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE_HEX
        .iter()
        .filter_map(|hex| Color::from_hex(hex))
        .collect()
}
