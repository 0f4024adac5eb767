use arcglow_common::Rgba;
use serde::{Deserialize, Serialize};

/// One `(position, color)` pair of a radial gradient. Positions run from the
/// inner radius (0.0) to the outer radius (1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(position: f64, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// A concentric radial gradient in surface pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Sorted by position, no duplicate positions.
    pub stops: Vec<ColorStop>,
}

/// Where the arc sits on a surface of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub smaller_dimension: f64,
    pub mobile_scale: f64,
    pub max_radius: f64,
}

/// Everything painted for one frame, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameLayers {
    pub geometry: GradientGeometry,
    pub gradient: RadialGradient,
    pub vignette: RadialGradient,
}
