//! Full configuration validation.
//!
//! Validates numeric ranges and palette entries. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod animation;
mod helpers;
mod palette;
mod surface;

#[cfg(test)]
mod tests;

use crate::schema::ArcglowConfig;
use arcglow_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ArcglowConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    animation::validate_animation(&mut errors, config);
    animation::validate_output(&mut errors, config);
    palette::validate_palette(&mut errors, config);
    palette::validate_adjust(&mut errors, config);
    surface::validate_surface(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
