use std::path::Path;

use arcglow_common::{Rgba, RendererError};
use arcglow_config::defaults::MAX_SURFACE_DIM;
use image::RgbaImage;
use tracing::debug;

use super::raster::{blend_over, GradientLut};
use super::Surface;
use crate::gradient::RadialGradient;

/// An in-memory RGBA8 drawing surface (straight alpha).
pub struct PixelSurface {
    image: RgbaImage,
}

impl PixelSurface {
    /// Create a fully transparent surface. Both dimensions must lie in
    /// `1..=MAX_SURFACE_DIM`.
    pub fn new(width: u32, height: u32) -> Result<Self, RendererError> {
        check_size(width, height)?;
        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    /// Follow a host size change. Contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RendererError> {
        check_size(width, height)?;
        if (width, height) != self.image.dimensions() {
            debug!(width, height, "resizing surface");
            self.image = RgbaImage::new(width, height);
        }
        Ok(())
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Read one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let [r, g, b, a] = self.image.get_pixel_checked(x, y)?.0;
        Some(Rgba {
            r,
            g,
            b,
            a: a as f64 / 255.0,
        })
    }

    pub fn save_png(&self, path: &Path) -> Result<(), RendererError> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => {
                    RendererError::Io(format!("{}: {io}", path.display()))
                }
                other => RendererError::Encode(other.to_string()),
            })
    }
}

fn check_size(width: u32, height: u32) -> Result<(), RendererError> {
    let valid = 1..=MAX_SURFACE_DIM;
    if valid.contains(&width) && valid.contains(&height) {
        Ok(())
    } else {
        Err(RendererError::InvalidSurface { width, height })
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn clear(&mut self) {
        for px in self.image.pixels_mut() {
            px.0 = [0; 4];
        }
    }

    fn fill_radial(&mut self, gradient: &RadialGradient) {
        let span = gradient.outer_radius - gradient.inner_radius;
        if !(span > 0.0) || gradient.stops.is_empty() {
            return;
        }
        let lut = GradientLut::new(&gradient.stops);
        for (x, y, px) in self.image.enumerate_pixels_mut() {
            let dx = x as f64 + 0.5 - gradient.center_x;
            let dy = y as f64 + 0.5 - gradient.center_y;
            let distance = (dx * dx + dy * dy).sqrt();
            let t = (distance - gradient.inner_radius) / span;
            blend_over(&mut px.0, lut.sample(t));
        }
    }
}
