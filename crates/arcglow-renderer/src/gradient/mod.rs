//! Gradient Renderer math: geometry, animated color stops, and the vignette.
//!
//! Everything here is pure. Painting lives in [`crate::surface`] and the
//! per-frame state machine in [`crate::renderer`].

mod geometry;
mod stops;
mod types;
mod vignette;


pub use geometry::*;
pub use stops::*;
pub use types::*;
pub use vignette::*;

use arcglow_common::Color;

/// The animated palette gradient: radius 0 to `max_radius` around the arc center.
pub fn arc_gradient(geometry: &GradientGeometry, stops: Vec<ColorStop>) -> RadialGradient {
    RadialGradient {
        center_x: geometry.center_x,
        center_y: geometry.center_y,
        inner_radius: 0.0,
        outer_radius: geometry.max_radius,
        stops,
    }
}

/// Both layers of one frame, or `None` when there is nothing to draw.
///
/// `palette` is expected to be already adjusted.
pub fn compose_frame(
    palette: &[Color],
    progress: f64,
    width: u32,
    height: u32,
) -> Option<FrameLayers> {
    if palette.is_empty() {
        return None;
    }
    let geometry = GradientGeometry::for_surface(width, height);
    let stops = build_color_stops(palette, progress);
    Some(FrameLayers {
        geometry,
        gradient: arc_gradient(&geometry, stops),
        vignette: vignette_gradient(&geometry),
    })
}
