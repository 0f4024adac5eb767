//! Static dark edge overlay, independent of palette and time.

use arcglow_common::Color;

use super::types::{ColorStop, GradientGeometry, RadialGradient};

/// Inner radius of the overlay as a fraction of the outer radius.
pub const VIGNETTE_INNER_RATIO: f64 = 0.1;

/// Radius fraction → black opacity.
pub const VIGNETTE_KEYFRAMES: [(f64, f64); 22] = [
    (0.0, 0.0),
    (0.15, 0.0),
    (0.28, 0.01),
    (0.38, 0.025),
    (0.46, 0.045),
    (0.53, 0.07),
    (0.59, 0.1),
    (0.64, 0.14),
    (0.69, 0.19),
    (0.73, 0.25),
    (0.77, 0.32),
    (0.81, 0.4),
    (0.84, 0.48),
    (0.87, 0.57),
    (0.9, 0.66),
    (0.92, 0.74),
    (0.94, 0.81),
    (0.96, 0.87),
    (0.97, 0.91),
    (0.98, 0.94),
    (0.99, 0.97),
    (1.0, 1.0),
];

pub fn vignette_stops() -> Vec<ColorStop> {
    VIGNETTE_KEYFRAMES
        .iter()
        .map(|&(position, opacity)| ColorStop::new(position, Color::BLACK.with_alpha(opacity)))
        .collect()
}

pub fn vignette_gradient(geometry: &GradientGeometry) -> RadialGradient {
    RadialGradient {
        center_x: geometry.center_x,
        center_y: geometry.center_y,
        inner_radius: geometry.max_radius * VIGNETTE_INNER_RATIO,
        outer_radius: geometry.max_radius,
        stops: vignette_stops(),
    }
}
