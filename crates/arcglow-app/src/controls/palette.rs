//! Bulk palette text plus one swatch per color.

use arcglow_common::Color;
use arcglow_config::colors::{format_hex, palette_to_text, parse_color};
use arcglow_renderer::RenderSettings;
use tracing::debug;

use super::sampler::ColorSampler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub index: usize,
    pub hex: String,
    pub aria_label: String,
    /// A pick-from-screen button is offered next to this swatch.
    pub eyedropper: bool,
}

impl Swatch {
    fn new(index: usize, color: &Color, eyedropper: bool) -> Self {
        Self {
            index,
            hex: format_hex(color),
            aria_label: format!("Color {}", index + 1),
            eyedropper,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaletteEditor {
    text: String,
    swatches: Vec<Swatch>,
    eyedropper: bool,
}

impl PaletteEditor {
    pub fn new(palette: &[Color], eyedropper: bool) -> Self {
        let mut editor = Self {
            text: String::new(),
            swatches: Vec::new(),
            eyedropper,
        };
        editor.sync(palette);
        editor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Bulk text edit. The palette and swatches change only when at least one
    /// entry is a valid color.
    pub fn on_text_input(&mut self, text: &str, settings: &mut RenderSettings) -> bool {
        self.text = text.to_string();
        if !settings.set_palette_text(text) {
            return false;
        }
        self.rebuild_swatches(settings.palette());
        true
    }

    /// Single swatch edit; invalid hex or an unknown index changes nothing.
    pub fn on_swatch_input(
        &mut self,
        index: usize,
        hex: &str,
        settings: &mut RenderSettings,
    ) -> bool {
        let Ok(color) = parse_color(hex) else {
            debug!(index, hex, "ignoring invalid swatch color");
            return false;
        };
        if !settings.set_color(index, color) {
            return false;
        }
        if let Some(swatch) = self.swatches.get_mut(index) {
            swatch.hex = format_hex(&color);
        }
        self.text = palette_to_text(settings.palette());
        true
    }

    pub fn pick_from_screen(
        &mut self,
        index: usize,
        sampler: &mut dyn ColorSampler,
        settings: &mut RenderSettings,
    ) -> bool {
        if !sampler.is_available() {
            return false;
        }
        match sampler.pick() {
            Some(hex) => self.on_swatch_input(index, &hex, settings),
            None => false,
        }
    }

    pub fn restore(&mut self, settings: &mut RenderSettings) {
        settings.reset_palette();
        self.sync(settings.palette());
    }

    /// Re-derive text and swatches from `palette`.
    pub fn sync(&mut self, palette: &[Color]) {
        self.text = palette_to_text(palette);
        self.rebuild_swatches(palette);
    }

    fn rebuild_swatches(&mut self, palette: &[Color]) {
        self.swatches = palette
            .iter()
            .enumerate()
            .map(|(index, color)| Swatch::new(index, color, self.eyedropper))
            .collect();
    }
}
