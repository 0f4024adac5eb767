use super::types::GradientGeometry;

/// Surfaces narrower than this get the wider mobile arc.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const MOBILE_SCALE: f64 = 1.5;
/// Outer radius as a multiple of the smaller surface dimension.
pub const RADIUS_FACTOR: f64 = 1.2825;

impl GradientGeometry {
    /// Center horizontally on the bottom edge; radius follows the smaller side.
    pub fn for_surface(width: u32, height: u32) -> Self {
        let width = width as f64;
        let height = height as f64;
        let smaller_dimension = width.min(height);
        let mobile_scale = if width < MOBILE_BREAKPOINT {
            MOBILE_SCALE
        } else {
            1.0
        };
        Self {
            center_x: width / 2.0,
            center_y: height,
            smaller_dimension,
            mobile_scale,
            max_radius: smaller_dimension * RADIUS_FACTOR * mobile_scale,
        }
    }
}
