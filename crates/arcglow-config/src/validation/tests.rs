//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = ArcglowConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_duration() {
    let mut config = ArcglowConfig::default();
    config.animation.duration_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.duration_ms"));
}

#[test]
fn catches_duration_too_long() {
    let mut config = ArcglowConfig::default();
    config.animation.duration_ms = 120_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.duration_ms"));
}

#[test]
fn catches_bad_palette_entry_with_index() {
    let mut config = ArcglowConfig::default();
    config.palette.colors = vec!["#ff0000".into(), "zzzzzz".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.colors[1]"));
    assert!(!err.contains("palette.colors[0]"));
}

#[test]
fn empty_palette_is_valid() {
    let mut config = ArcglowConfig::default();
    config.palette.colors.clear();
    assert!(validate(&config).is_ok());
}

#[test]
fn hue_offset_is_unbounded() {
    let mut config = ArcglowConfig::default();
    config.adjust.hue_offset = -1080;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_saturation_out_of_range() {
    let mut config = ArcglowConfig::default();
    config.adjust.saturation = 250;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("adjust.saturation"));
}

#[test]
fn catches_negative_lightness() {
    let mut config = ArcglowConfig::default();
    config.adjust.lightness = -5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("adjust.lightness"));
}

#[test]
fn catches_zero_sized_surface() {
    let mut config = ArcglowConfig::default();
    config.surface.width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("surface.width"));
}

#[test]
fn catches_fps_and_empty_directory() {
    let mut config = ArcglowConfig::default();
    config.output.fps = 0;
    config.output.directory = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("output.fps"));
    assert!(err.contains("output.directory"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ArcglowConfig::default();
    config.animation.duration_ms = 0;
    config.surface.height = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.duration_ms"));
    assert!(err.contains("surface.height"));
    assert!(err.contains("; "));
}
