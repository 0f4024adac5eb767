//! Single-frame output: PNG frames and stop dumps.

use std::path::Path;

use arcglow_common::ArcglowError;
use arcglow_renderer::{build_color_stops, GradientRenderer, PixelSurface, RenderPhase};
use tracing::info;

use super::core::ArcglowApp;

impl ArcglowApp {
    /// Paint the frame at `progress` onto a fresh surface.
    pub fn render_frame(&self, progress: f64) -> Result<(PixelSurface, RenderPhase), ArcglowError> {
        let (width, height) = self.surface_size();
        let mut surface = PixelSurface::new(width, height)?;
        let phase = GradientRenderer::new().render(
            &mut surface,
            &self.settings.adjusted_palette(),
            progress,
        );
        Ok((surface, phase))
    }

    pub fn write_frame(&self, progress: f64, out: &Path) -> Result<RenderPhase, ArcglowError> {
        let (surface, phase) = self.render_frame(progress)?;
        surface.save_png(out)?;
        info!(?phase, progress, "wrote {}", out.display());
        Ok(phase)
    }

    /// The color stops of the frame at `progress`, as pretty JSON.
    pub fn stops_json(&self, progress: f64) -> Result<String, ArcglowError> {
        let stops = build_color_stops(&self.settings.adjusted_palette(), progress);
        serde_json::to_string_pretty(&stops)
            .map_err(|e| ArcglowError::Other(format!("failed to serialize stops: {e}")))
    }
}
