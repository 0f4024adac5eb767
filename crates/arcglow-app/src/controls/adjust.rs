use arcglow_config::defaults::{
    DEFAULT_HUE_OFFSET, DEFAULT_LIGHTNESS_PERCENT, DEFAULT_SATURATION_PERCENT,
};
use arcglow_renderer::{HslAdjustment, RenderSettings};

use super::parse::int_or;

/// Hue, saturation and lightness dials. Labels show the committed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustControls {
    current: HslAdjustment,
}

impl AdjustControls {
    pub fn new(adjustment: HslAdjustment) -> Self {
        Self {
            current: adjustment,
        }
    }

    pub fn adjustment(&self) -> HslAdjustment {
        self.current
    }

    pub fn on_hue_input(&mut self, raw: &str, settings: &mut RenderSettings) {
        let mut next = self.current;
        next.hue_offset_degrees = int_or(raw, DEFAULT_HUE_OFFSET);
        self.commit(next, settings);
    }

    pub fn on_saturation_input(&mut self, raw: &str, settings: &mut RenderSettings) {
        let mut next = self.current;
        next.saturation_scale_percent = int_or(raw, DEFAULT_SATURATION_PERCENT);
        self.commit(next, settings);
    }

    pub fn on_lightness_input(&mut self, raw: &str, settings: &mut RenderSettings) {
        let mut next = self.current;
        next.lightness_scale_percent = int_or(raw, DEFAULT_LIGHTNESS_PERCENT);
        self.commit(next, settings);
    }

    pub fn restore(&mut self, settings: &mut RenderSettings) {
        self.commit(HslAdjustment::IDENTITY, settings);
    }

    pub fn sync(&mut self, adjustment: HslAdjustment) {
        self.current = adjustment;
    }

    pub fn hue_label(&self) -> String {
        self.current.hue_offset_degrees.to_string()
    }

    pub fn saturation_label(&self) -> String {
        format!("{}%", self.current.saturation_scale_percent)
    }

    pub fn lightness_label(&self) -> String {
        format!("{}%", self.current.lightness_scale_percent)
    }

    fn commit(&mut self, next: HslAdjustment, settings: &mut RenderSettings) {
        settings.set_adjustment(next);
        self.current = settings.adjustment();
    }
}

impl Default for AdjustControls {
    fn default() -> Self {
        Self::new(HslAdjustment::IDENTITY)
    }
}
