//! Palette entry and HSL adjustment validation.

use crate::colors::validate_color;
use crate::schema::ArcglowConfig;

use super::helpers::validate_range_i32;

/// Every palette entry must be a six-digit hex color.
pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &ArcglowConfig) {
    for (i, entry) in config.palette.colors.iter().enumerate() {
        if !validate_color(entry) {
            errors.push(format!("palette.colors[{i}] = {entry:?} is not a #RRGGBB color"));
        }
    }
}

/// Saturation and lightness scales stay within the dial range.
pub(crate) fn validate_adjust(errors: &mut Vec<String>, config: &ArcglowConfig) {
    validate_range_i32(
        errors,
        "adjust.saturation",
        config.adjust.saturation,
        0,
        200,
    );
    validate_range_i32(errors, "adjust.lightness", config.adjust.lightness, 0, 200);
}
