//! Command-line edits, fed through the same controls a user would touch.

use std::path::PathBuf;
use std::time::Instant;

use arcglow_common::ArcglowError;
use tracing::{info, warn};

use crate::controls::ImageSampler;

use super::core::ArcglowApp;

/// Pick one palette slot from a pixel of an image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    pub image: PathBuf,
    pub x: u32,
    pub y: u32,
    pub slot: usize,
}

/// Raw override values. Strings go through the controls' own parsing and
/// fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub speed: Option<String>,
    pub colors: Option<String>,
    pub hue: Option<String>,
    pub saturation: Option<String>,
    pub lightness: Option<String>,
    pub pick: Option<PickRequest>,
}

impl ArcglowApp {
    /// Apply overrides in control order: speed, palette text, picked color,
    /// then the HSL dials. Only an unreadable pick image is an error.
    pub fn apply_overrides(
        &mut self,
        overrides: &Overrides,
        now: Instant,
    ) -> Result<(), ArcglowError> {
        self.pin_size(overrides);

        if let Some(ref raw) = overrides.speed {
            self.speed.on_dial_input(raw, &mut self.settings, now);
            info!("speed set to {}", self.speed.label());
        }

        if let Some(ref text) = overrides.colors {
            if !self.palette.on_text_input(text, &mut self.settings) {
                warn!("no valid colors in {text:?}, keeping current palette");
            }
        }

        if let Some(ref pick) = overrides.pick {
            let mut sampler = ImageSampler::open(&pick.image, pick.x, pick.y)?;
            if self
                .palette
                .pick_from_screen(pick.slot, &mut sampler, &mut self.settings)
            {
                info!(slot = pick.slot, "picked color from {}", pick.image.display());
            } else {
                warn!(
                    slot = pick.slot,
                    x = pick.x,
                    y = pick.y,
                    "color pick changed nothing (pixel or slot out of range)"
                );
            }
        }

        if let Some(ref raw) = overrides.hue {
            self.adjust.on_hue_input(raw, &mut self.settings);
        }
        if let Some(ref raw) = overrides.saturation {
            self.adjust.on_saturation_input(raw, &mut self.settings);
        }
        if let Some(ref raw) = overrides.lightness {
            self.adjust.on_lightness_input(raw, &mut self.settings);
        }

        Ok(())
    }
}
