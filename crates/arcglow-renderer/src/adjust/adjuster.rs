use arcglow_common::Color;
use arcglow_config::defaults::{
    DEFAULT_HUE_OFFSET, DEFAULT_LIGHTNESS_PERCENT, DEFAULT_SATURATION_PERCENT,
};
use serde::{Deserialize, Serialize};

use super::hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};

/// Upper bound of the saturation and lightness dials.
pub const MAX_SCALE_PERCENT: i32 = 200;

/// Global hue/saturation/lightness transform, applied to every palette color
/// at render time. Never written back into the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HslAdjustment {
    pub hue_offset_degrees: i32,
    pub saturation_scale_percent: i32,
    pub lightness_scale_percent: i32,
}

impl HslAdjustment {
    pub const IDENTITY: Self = Self {
        hue_offset_degrees: DEFAULT_HUE_OFFSET,
        saturation_scale_percent: DEFAULT_SATURATION_PERCENT,
        lightness_scale_percent: DEFAULT_LIGHTNESS_PERCENT,
    };

    pub fn new(hue_offset_degrees: i32, saturation: i32, lightness: i32) -> Self {
        Self {
            hue_offset_degrees,
            saturation_scale_percent: saturation,
            lightness_scale_percent: lightness,
        }
    }

    /// Clamp both scales into the dial range; the hue offset is left alone.
    pub fn clamped(self) -> Self {
        Self {
            hue_offset_degrees: self.hue_offset_degrees,
            saturation_scale_percent: self.saturation_scale_percent.clamp(0, MAX_SCALE_PERCENT),
            lightness_scale_percent: self.lightness_scale_percent.clamp(0, MAX_SCALE_PERCENT),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.hue_offset_degrees.rem_euclid(360) == 0
            && self.saturation_scale_percent == 100
            && self.lightness_scale_percent == 100
    }
}

impl Default for HslAdjustment {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotate hue, then scale saturation and lightness, clamping both to `[0, 100]`.
pub fn adjust_color(color: Color, adjustment: &HslAdjustment) -> Color {
    let hsl = rgb_to_hsl(color);
    let h = (hsl.h + adjustment.hue_offset_degrees as f64).rem_euclid(360.0);
    let s = (hsl.s * adjustment.saturation_scale_percent as f64 / 100.0).clamp(0.0, 100.0);
    let l = (hsl.l * adjustment.lightness_scale_percent as f64 / 100.0).clamp(0.0, 100.0);
    hsl_to_rgb(Hsl { h, s, l })
}

/// Adjust every palette color, preserving order.
pub fn adjust_palette(palette: &[Color], adjustment: &HslAdjustment) -> Vec<Color> {
    palette
        .iter()
        .map(|c| adjust_color(*c, adjustment))
        .collect()
}
