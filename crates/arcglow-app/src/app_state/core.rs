//! ArcglowApp struct definition and constructor.

use std::time::Instant;

use arcglow_config::ArcglowConfig;
use arcglow_renderer::RenderSettings;
use tracing::info;

use crate::controls::{AdjustControls, PaletteEditor, SpeedControl};

use super::overrides::Overrides;

/// Top-level application state.
pub struct ArcglowApp {
    pub(super) config: ArcglowConfig,
    pub(super) settings: RenderSettings,

    // Controls
    pub(super) speed: SpeedControl,
    pub(super) palette: PaletteEditor,
    pub(super) adjust: AdjustControls,

    // Surface size pinned from the command line
    pub(super) width_override: Option<u32>,
    pub(super) height_override: Option<u32>,
}

impl ArcglowApp {
    pub fn new(config: ArcglowConfig, now: Instant) -> Self {
        let settings = RenderSettings::from_config(&config, now);
        Self {
            speed: SpeedControl::new(settings.duration_ms()),
            palette: PaletteEditor::new(settings.palette(), false),
            adjust: AdjustControls::new(settings.adjustment()),
            settings,
            config,
            width_override: None,
            height_override: None,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn config(&self) -> &ArcglowConfig {
        &self.config
    }

    pub fn speed(&self) -> &SpeedControl {
        &self.speed
    }

    pub fn palette(&self) -> &PaletteEditor {
        &self.palette
    }

    pub fn adjust(&self) -> &AdjustControls {
        &self.adjust
    }

    /// Surface size: command-line values win over the config.
    pub fn surface_size(&self) -> (u32, u32) {
        (
            self.width_override.unwrap_or(self.config.surface.width),
            self.height_override.unwrap_or(self.config.surface.height),
        )
    }

    /// Adopt a reloaded config and bring the controls back in line with it.
    pub fn apply_config(&mut self, config: ArcglowConfig, now: Instant) {
        self.settings.apply_config(&config, now);
        self.speed.sync(self.settings.duration_ms());
        self.palette.sync(self.settings.palette());
        self.adjust.sync(self.settings.adjustment());
        self.config = config;
        info!(
            colors = self.settings.palette().len(),
            duration_ms = self.settings.duration_ms(),
            "config applied"
        );
    }

    pub(super) fn pin_size(&mut self, overrides: &Overrides) {
        self.width_override = overrides.width;
        self.height_override = overrides.height;
    }
}
