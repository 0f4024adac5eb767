//! Per-frame paint pass: clear, animated gradient, then the vignette.

use arcglow_common::Color;
use tracing::{debug, trace};

use crate::gradient::compose_frame;
use crate::surface::Surface;

/// What the last render pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderPhase {
    /// Nothing to draw (empty palette); the surface was only cleared.
    #[default]
    Idle,
    Rendering,
}

#[derive(Debug, Default)]
pub struct GradientRenderer {
    phase: RenderPhase,
    frames: u64,
}

impl GradientRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Frames painted with at least one layer.
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Paint one frame. `palette` must already carry the HSL adjustment.
    pub fn render<S: Surface>(
        &mut self,
        surface: &mut S,
        palette: &[Color],
        progress: f64,
    ) -> RenderPhase {
        trace!(progress, colors = palette.len(), "render pass");
        surface.clear();
        let phase = match compose_frame(palette, progress, surface.width(), surface.height()) {
            Some(layers) => {
                surface.fill_radial(&layers.gradient);
                surface.fill_radial(&layers.vignette);
                self.frames += 1;
                RenderPhase::Rendering
            }
            None => RenderPhase::Idle,
        };
        if phase != self.phase {
            debug!(?phase, "render phase changed");
            self.phase = phase;
        }
        phase
    }
}
