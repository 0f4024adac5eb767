//! Cycle speed dial and preset selector.

use std::time::Instant;

use arcglow_config::defaults::{DEFAULT_DURATION_MS, SPEED_PRESETS_MS};
use arcglow_renderer::RenderSettings;

use super::parse::parse_leading_int;

/// Dial, preset selector and readout. Every edit restarts the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedControl {
    dial_ms: u32,
    select_ms: u32,
    label: String,
}

impl SpeedControl {
    pub fn new(duration_ms: u32) -> Self {
        let mut control = Self {
            dial_ms: DEFAULT_DURATION_MS,
            select_ms: DEFAULT_DURATION_MS,
            label: String::new(),
        };
        control.sync(duration_ms);
        control
    }

    pub fn dial_ms(&self) -> u32 {
        self.dial_ms
    }

    pub fn select_ms(&self) -> u32 {
        self.select_ms
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Live dial movement: the raw value drives the animation, the selector
    /// follows the nearest preset.
    pub fn on_dial_input(&mut self, raw: &str, settings: &mut RenderSettings, now: Instant) {
        let ms = parse_duration(raw);
        self.dial_ms = ms;
        self.select_ms = nearest_preset(ms);
        self.label = ms_to_label(ms);
        settings.set_duration(ms, now);
    }

    /// Dial released: snap everything to the nearest preset.
    pub fn on_dial_commit(&mut self, raw: &str, settings: &mut RenderSettings, now: Instant) {
        let snapped = nearest_preset(parse_duration(raw));
        self.dial_ms = snapped;
        self.select_ms = snapped;
        self.label = ms_to_label(snapped);
        settings.set_duration(snapped, now);
    }

    pub fn on_select_change(&mut self, raw: &str, settings: &mut RenderSettings, now: Instant) {
        let ms = parse_duration(raw);
        self.dial_ms = ms;
        self.select_ms = ms;
        self.label = ms_to_label(ms);
        settings.set_duration(ms, now);
    }

    pub fn restore(&mut self, settings: &mut RenderSettings, now: Instant) {
        self.sync(DEFAULT_DURATION_MS);
        settings.set_duration(DEFAULT_DURATION_MS, now);
    }

    /// Reflect a duration set elsewhere (config reload) without touching the clock.
    pub fn sync(&mut self, duration_ms: u32) {
        self.dial_ms = duration_ms;
        self.select_ms = nearest_preset(duration_ms);
        self.label = ms_to_label(duration_ms);
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS)
    }
}

fn parse_duration(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => DEFAULT_DURATION_MS,
    }
}

/// Seconds without a trailing `.0`, suffixed with `s`.
pub fn ms_to_label(ms: u32) -> String {
    format!("{}s", ms as f64 / 1000.0)
}

/// Closest preset; on a tie the smaller preset wins.
pub fn nearest_preset(ms: u32) -> u32 {
    let mut best = SPEED_PRESETS_MS[0];
    let mut best_diff = best.abs_diff(ms);
    for &preset in &SPEED_PRESETS_MS {
        let diff = preset.abs_diff(ms);
        if diff < best_diff {
            best = preset;
            best_diff = diff;
        }
    }
    best
}
