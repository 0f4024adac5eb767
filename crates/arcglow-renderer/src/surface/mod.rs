//! Drawing surfaces.
//!
//! The renderer only needs to clear a surface and fill it with radial
//! gradients; [`PixelSurface`] does both in software over an RGBA buffer.

mod pixel;
mod raster;

pub use pixel::*;
pub use raster::{blend_over, GradientLut, Premul, LUT_SIZE};

use crate::gradient::RadialGradient;

/// Something a frame can be painted onto.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Reset every pixel to transparent.
    fn clear(&mut self);
    /// Composite `gradient` over the whole surface.
    fn fill_radial(&mut self, gradient: &RadialGradient);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{ColorStop, RadialGradient};
    use arcglow_common::{Color, RendererError, Rgba};

    fn two_stop(inner: f64, outer: f64) -> RadialGradient {
        RadialGradient {
            center_x: 5.0,
            center_y: 5.0,
            inner_radius: inner,
            outer_radius: outer,
            stops: vec![
                ColorStop::new(0.0, Color::from_rgb(255, 0, 0).with_alpha(1.0)),
                ColorStop::new(1.0, Rgba::TRANSPARENT),
            ],
        }
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(matches!(
            PixelSurface::new(0, 10),
            Err(RendererError::InvalidSurface { width: 0, height: 10 })
        ));
        let mut s = PixelSurface::new(4, 4).unwrap();
        assert!(s.resize(4, 0).is_err());
    }

    #[test]
    fn oversized_surface_is_rejected() {
        assert!(matches!(
            PixelSurface::new(u32::MAX, u32::MAX),
            Err(RendererError::InvalidSurface { .. })
        ));
        assert!(PixelSurface::new(8193, 1).is_err());
        assert!(PixelSurface::new(1, 8193).is_err());

        let mut s = PixelSurface::new(4, 4).unwrap();
        assert!(matches!(
            s.resize(100_000, 4),
            Err(RendererError::InvalidSurface { width: 100_000, height: 4 })
        ));
        assert_eq!((s.width(), s.height()), (4, 4));
    }

    #[test]
    fn new_surface_is_transparent() {
        let s = PixelSurface::new(3, 2).unwrap();
        assert_eq!(s.width(), 3);
        assert_eq!(s.height(), 2);
        assert!(s.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
        assert!(s.pixel(3, 0).is_none());
    }

    #[test]
    fn lut_pads_beyond_the_ends() {
        let lut = GradientLut::new(&two_stop(0.0, 1.0).stops);
        assert_eq!(lut.sample(-3.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(lut.sample(7.0), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn lut_interpolates_premultiplied() {
        let lut = GradientLut::new(&two_stop(0.0, 1.0).stops);
        let mid = lut.sample(0.5);
        // Alpha and premultiplied red fall together; straight red stays 255.
        assert!((mid[3] - 0.5).abs() < 0.01);
        assert!((mid[0] - mid[3]).abs() < 1e-6);
    }

    #[test]
    fn empty_stop_list_samples_transparent() {
        let lut = GradientLut::new(&[]);
        assert_eq!(lut.sample(0.5), [0.0; 4]);
    }

    #[test]
    fn blend_over_transparent_takes_source() {
        let mut px = [0, 0, 0, 0];
        blend_over(&mut px, [0.5, 0.0, 0.0, 0.5]);
        assert_eq!(px, [255, 0, 0, 128]);
    }

    #[test]
    fn blend_over_opaque_mixes() {
        let mut px = [255, 255, 255, 255];
        blend_over(&mut px, [0.0, 0.0, 0.0, 0.5]);
        assert_eq!(px, [128, 128, 128, 255]);

        let mut untouched = [10, 20, 30, 255];
        blend_over(&mut untouched, [0.0; 4]);
        assert_eq!(untouched, [10, 20, 30, 255]);
    }

    #[test]
    fn fill_radial_paints_center_and_pads_inside_inner_radius() {
        let mut s = PixelSurface::new(10, 10).unwrap();
        s.fill_radial(&two_stop(2.0, 4.0));
        // Inside the inner radius: first stop
        let center = s.pixel(5, 5).unwrap();
        assert_eq!((center.r, center.g, center.b), (255, 0, 0));
        assert_eq!(center.a, 1.0);
        // Past the outer radius: last stop (transparent)
        assert_eq!(s.pixel(0, 0).unwrap().a, 0.0);
    }

    #[test]
    fn degenerate_radii_paint_nothing() {
        let mut s = PixelSurface::new(4, 4).unwrap();
        s.fill_radial(&two_stop(3.0, 3.0));
        assert!(s.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn clear_resets_pixels() {
        let mut s = PixelSurface::new(10, 10).unwrap();
        s.fill_radial(&two_stop(0.0, 20.0));
        assert!(s.image().pixels().any(|p| p.0[3] > 0));
        s.clear();
        assert!(s.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn resize_changes_dimensions() {
        let mut s = PixelSurface::new(4, 4).unwrap();
        s.resize(8, 2).unwrap();
        assert_eq!((s.width(), s.height()), (8, 2));
    }

    #[test]
    fn save_png_round_trips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut s = PixelSurface::new(10, 10).unwrap();
        s.fill_radial(&two_stop(2.0, 4.0));
        s.save_png(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (10, 10));
        assert_eq!(loaded.get_pixel(5, 5).0, [255, 0, 0, 255]);
    }

    #[test]
    fn save_png_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.png");
        let s = PixelSurface::new(2, 2).unwrap();
        assert!(s.save_png(&path).is_err());
    }
}
