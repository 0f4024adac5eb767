//! Mutable render state: palette, HSL adjustment, and animation clock.
//!
//! Every setter validates or defaults its input before committing, so the
//! next frame never observes a half-applied edit. The render loop reads an
//! immutable [`FrameSnapshot`] once per pass.

use std::time::Instant;

use arcglow_common::Color;
use arcglow_config::colors::{parse_palette, parse_palette_entries};
use arcglow_config::defaults::default_palette;
use arcglow_config::ArcglowConfig;
use tracing::debug;

use crate::adjust::{adjust_palette, HslAdjustment};
use crate::clock::{sanitize_duration, AnimationClock};

/// What one render pass needs, captured at the start of the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Palette with the HSL adjustment already applied.
    pub palette: Vec<Color>,
    pub progress: f64,
}

#[derive(Debug, Clone)]
pub struct RenderSettings {
    palette: Vec<Color>,
    adjustment: HslAdjustment,
    clock: AnimationClock,
}

impl RenderSettings {
    /// Build settings as given. An empty palette is allowed and renders idle.
    pub fn new(
        palette: Vec<Color>,
        duration_ms: u32,
        adjustment: HslAdjustment,
        now: Instant,
    ) -> Self {
        Self {
            palette,
            adjustment: adjustment.clamped(),
            clock: AnimationClock::new(now, duration_ms),
        }
    }

    /// Defaults, then the config applied through the validating setters.
    pub fn from_config(config: &ArcglowConfig, now: Instant) -> Self {
        let mut settings = Self::new(
            default_palette(),
            config.animation.duration_ms,
            HslAdjustment::default(),
            now,
        );
        settings.replace_palette(parse_palette_entries(&config.palette.colors));
        settings.set_adjustment(adjustment_from_config(config));
        settings
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn adjustment(&self) -> HslAdjustment {
        self.adjustment
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn duration_ms(&self) -> u32 {
        self.clock.duration_ms()
    }

    /// Swap in a whole new palette. An empty replacement is ignored and
    /// `false` is returned.
    pub fn replace_palette(&mut self, palette: Vec<Color>) -> bool {
        if palette.is_empty() {
            debug!("ignoring palette edit with no valid colors");
            return false;
        }
        self.palette = palette;
        true
    }

    /// Replace the palette from comma-separated hex text.
    pub fn set_palette_text(&mut self, text: &str) -> bool {
        self.replace_palette(parse_palette(text))
    }

    /// Replace one palette entry; out-of-range indices are ignored.
    pub fn set_color(&mut self, index: usize, color: Color) -> bool {
        match self.palette.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    pub fn reset_palette(&mut self) {
        self.palette = default_palette();
    }

    /// Change the cycle length and start a new cycle at `now`.
    pub fn set_duration(&mut self, duration_ms: u32, now: Instant) {
        self.clock.set_duration(duration_ms);
        self.clock.restart(now);
    }

    pub fn restart_clock(&mut self, now: Instant) {
        self.clock.restart(now);
    }

    pub fn set_adjustment(&mut self, adjustment: HslAdjustment) {
        self.adjustment = adjustment.clamped();
    }

    pub fn reset_adjustment(&mut self) {
        self.adjustment = HslAdjustment::default();
    }

    /// Apply a reloaded config. The clock only restarts when the duration
    /// actually changed; a palette with no valid entries is ignored.
    pub fn apply_config(&mut self, config: &ArcglowConfig, now: Instant) {
        if self.replace_palette(parse_palette_entries(&config.palette.colors)) {
            debug!(colors = self.palette.len(), "palette updated from config");
        }
        let duration_ms = sanitize_duration(config.animation.duration_ms);
        if duration_ms != self.duration_ms() {
            debug!(duration_ms, "duration updated from config");
            self.set_duration(duration_ms, now);
        }
        self.set_adjustment(adjustment_from_config(config));
    }

    pub fn snapshot(&self, now: Instant) -> FrameSnapshot {
        FrameSnapshot {
            palette: self.adjusted_palette(),
            progress: self.clock.progress_at(now),
        }
    }

    pub fn adjusted_palette(&self) -> Vec<Color> {
        if self.adjustment.is_identity() {
            return self.palette.clone();
        }
        adjust_palette(&self.palette, &self.adjustment)
    }
}

fn adjustment_from_config(config: &ArcglowConfig) -> HslAdjustment {
    HslAdjustment::new(
        config.adjust.hue_offset,
        config.adjust.saturation,
        config.adjust.lightness,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settings() -> RenderSettings {
        RenderSettings::new(
            default_palette(),
            1000,
            HslAdjustment::default(),
            Instant::now(),
        )
    }

    #[test]
    fn invalid_bulk_edit_keeps_palette() {
        let mut s = settings();
        assert!(!s.set_palette_text("zzzzzz, not-a-color"));
        assert_eq!(s.palette(), default_palette().as_slice());
    }

    #[test]
    fn valid_bulk_edit_replaces_palette() {
        let mut s = settings();
        assert!(s.set_palette_text("#ff0000, junk, 00ff00"));
        assert_eq!(
            s.palette(),
            &[Color::from_rgb(255, 0, 0), Color::from_rgb(0, 255, 0)]
        );
    }

    #[test]
    fn set_color_ignores_out_of_range() {
        let mut s = settings();
        assert!(s.set_color(1, Color::BLACK));
        assert_eq!(s.palette()[1], Color::BLACK);
        assert!(!s.set_color(99, Color::BLACK));
        assert_eq!(s.palette().len(), 8);
    }

    #[test]
    fn reset_palette_restores_defaults() {
        let mut s = settings();
        s.set_palette_text("#000000");
        s.reset_palette();
        assert_eq!(s.palette(), default_palette().as_slice());
    }

    #[test]
    fn set_duration_restarts_cycle() {
        let start = Instant::now();
        let mut s = RenderSettings::new(default_palette(), 1000, HslAdjustment::default(), start);
        let later = start + Duration::from_millis(700);
        s.set_duration(4000, later);
        assert_eq!(s.duration_ms(), 4000);
        assert_eq!(s.snapshot(later).progress, 0.0);
        let p = s.snapshot(later + Duration::from_millis(1000)).progress;
        assert!((p - 0.25).abs() < 1e-9);
    }

    #[test]
    fn adjustment_is_clamped_on_commit() {
        let mut s = settings();
        s.set_adjustment(HslAdjustment::new(30, 500, -10));
        assert_eq!(s.adjustment(), HslAdjustment::new(30, 200, 0));
        s.reset_adjustment();
        assert_eq!(s.adjustment(), HslAdjustment::IDENTITY);
    }

    #[test]
    fn snapshot_applies_adjustment_without_touching_palette() {
        let start = Instant::now();
        let mut s = RenderSettings::new(
            vec![Color::from_rgb(255, 0, 0)],
            1000,
            HslAdjustment::default(),
            start,
        );
        s.set_adjustment(HslAdjustment::new(120, 100, 100));
        let snap = s.snapshot(start);
        assert_eq!(snap.palette, vec![Color::from_rgb(0, 255, 0)]);
        assert_eq!(s.palette(), &[Color::from_rgb(255, 0, 0)]);
    }

    #[test]
    fn from_config_with_no_valid_colors_uses_defaults() {
        let mut config = ArcglowConfig::default();
        config.palette.colors = vec!["nope".into()];
        config.adjust.hue_offset = 45;
        let s = RenderSettings::from_config(&config, Instant::now());
        assert_eq!(s.palette(), default_palette().as_slice());
        assert_eq!(s.adjustment().hue_offset_degrees, 45);
    }

    #[test]
    fn apply_config_restarts_only_on_duration_change() {
        let start = Instant::now();
        let config = ArcglowConfig::default();
        let mut s = RenderSettings::from_config(&config, start);

        let later = start + Duration::from_millis(300);
        s.apply_config(&config, later);
        assert_eq!(s.clock().start(), start);

        let mut faster = config.clone();
        faster.animation.duration_ms = 3000;
        faster.palette.colors = vec!["#123456".into()];
        s.apply_config(&faster, later);
        assert_eq!(s.clock().start(), later);
        assert_eq!(s.duration_ms(), 3000);
        assert_eq!(s.palette(), &[Color::from_rgb(0x12, 0x34, 0x56)]);
    }

    #[test]
    fn zero_duration_in_config_does_not_restart_on_reload() {
        let start = Instant::now();
        let mut config = ArcglowConfig::default();
        config.animation.duration_ms = 0;
        let mut s = RenderSettings::from_config(&config, start);
        assert_eq!(s.duration_ms(), 9000);

        let later = start + Duration::from_millis(400);
        config.palette.colors = vec!["#00ff00".into()];
        s.apply_config(&config, later);
        assert_eq!(s.clock().start(), start);
        assert_eq!(s.palette(), &[Color::from_rgb(0, 255, 0)]);
    }

    #[test]
    fn empty_palette_snapshot_is_empty() {
        let s = RenderSettings::new(Vec::new(), 1000, HslAdjustment::default(), Instant::now());
        assert!(s.snapshot(Instant::now()).palette.is_empty());
    }
}
