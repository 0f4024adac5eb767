use std::path::Path;

use arcglow_common::{ArcglowError, Color};
use image::RgbaImage;

/// Source of a single picked color, returned as hex text.
pub trait ColorSampler {
    /// Whether picking is possible at all on this host.
    fn is_available(&self) -> bool {
        true
    }

    /// Pick one color. `None` means unavailable or cancelled.
    fn pick(&mut self) -> Option<String>;
}

/// A host without a screen picker.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSampler;

impl ColorSampler for NoSampler {
    fn is_available(&self) -> bool {
        false
    }

    fn pick(&mut self) -> Option<String> {
        None
    }
}

/// Picks one fixed pixel of an image. Out-of-bounds reads as cancelled.
pub struct ImageSampler {
    image: RgbaImage,
    x: u32,
    y: u32,
}

impl ImageSampler {
    pub fn new(image: RgbaImage, x: u32, y: u32) -> Self {
        Self { image, x, y }
    }

    pub fn open(path: &Path, x: u32, y: u32) -> Result<Self, ArcglowError> {
        let image = image::open(path)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => ArcglowError::Io(io),
                other => ArcglowError::Other(format!("{}: {other}", path.display())),
            })?
            .to_rgba8();
        Ok(Self::new(image, x, y))
    }
}

impl ColorSampler for ImageSampler {
    fn pick(&mut self) -> Option<String> {
        let [r, g, b, _] = self.image.get_pixel_checked(self.x, self.y)?.0;
        Some(Color::from_rgb(r, g, b).to_hex())
    }
}
