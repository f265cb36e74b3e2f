//! Single-pixel sampling from decoded images.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader, RgbaImage};
use tracing::debug;

use super::ColorSampler;
use crate::color::{rgb_to_hex, RgbColor};
use crate::error::SampleError;

/// Samples the pixel under a cursor position of an in-memory image.
#[derive(Debug, Clone)]
pub struct ImagePixelSampler {
    image: RgbaImage,
    cursor: (u32, u32),
}

impl ImagePixelSampler {
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgba8(),
            cursor: (0, 0),
        }
    }

    /// Decodes PNG or JPEG bytes, guessing the format from the content.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SampleError> {
        let image = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()
            .map_err(|e| SampleError::Decode(e.to_string()))?;
        debug!(
            width = image.width(),
            height = image.height(),
            "decoded sample image"
        );
        Ok(Self::from_image(image))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SampleError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Moves the cursor used by [`ColorSampler::sample`].
    pub fn move_to(&mut self, x: u32, y: u32) {
        self.cursor = (x, y);
    }

    pub fn at(mut self, x: u32, y: u32) -> Self {
        self.move_to(x, y);
        self
    }

    /// Color at `(x, y)`; alpha is ignored.
    pub fn sample_at(&self, x: u32, y: u32) -> Result<RgbColor, SampleError> {
        let (width, height) = self.dimensions();
        let pixel = self
            .image
            .get_pixel_checked(x, y)
            .ok_or(SampleError::OutOfBounds {
                x,
                y,
                width,
                height,
            })?;
        let [r, g, b, _] = pixel.0;
        Ok(RgbColor::new(r, g, b))
    }
}

impl ColorSampler for ImagePixelSampler {
    fn sample(&mut self) -> Result<String, SampleError> {
        let (x, y) = self.cursor;
        self.sample_at(x, y).map(|rgb| rgb_to_hex(rgb).to_css())
    }
}
