//! Animation timing and frame output validation.

use crate::schema::ArcglowConfig;

use super::helpers::validate_range;

/// Validate the cycle duration.
pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &ArcglowConfig) {
    validate_range(
        errors,
        "animation.duration_ms",
        config.animation.duration_ms,
        100,
        60_000,
    );
}

/// Validate the frame output settings.
pub(crate) fn validate_output(errors: &mut Vec<String>, config: &ArcglowConfig) {
    validate_range(errors, "output.fps", config.output.fps, 1, 240);
    if config.output.directory.trim().is_empty() {
        errors.push("output.directory must not be empty".into());
    }
}
