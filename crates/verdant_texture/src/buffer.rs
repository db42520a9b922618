//! # Pixel Buffers
//!
//! Row-major, top-left origin, one packed `i32` per pixel.

use crate::color::Color;
use crate::error::{TextureError, TextureResult};

/// A synthesized bitmap in the engine's packed pixel format.
///
/// `pixels().len() == width * height` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<i32>,
}

impl PixelBuffer {
    /// Wraps packed pixels, checking them against the geometry.
    ///
    /// # Errors
    ///
    /// [`TextureError::InvalidDimensions`] if either side is zero or the
    /// pixel count differs from `width * height`.
    pub fn from_packed(width: u32, height: u32, pixels: Vec<i32>) -> TextureResult<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(TextureError::InvalidDimensions {
                width,
                height,
                pixels: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Fills a buffer by calling `shade(x, y)` for every pixel in row-major order.
    pub(crate) fn generate(
        width: u32,
        height: u32,
        mut shade: impl FnMut(u32, u32) -> Color,
    ) -> TextureResult<Self> {
        let mut pixels = Vec::with_capacity(pixel_count(width, height)?);
        for y in 0..height {
            for x in 0..width {
                pixels.push(shade(x, y).pack());
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Packed pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[i32] {
        &self.pixels
    }

    /// Decoded color at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.pixels.get(index).copied().map(Color::from_packed)
    }

    /// Decodes every pixel into `[r, g, b, a]` bytes.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&packed| Color::from_packed(packed).to_rgba8())
            .collect()
    }

    /// Consumes the buffer, returning the packed pixels.
    #[must_use]
    pub fn into_pixels(self) -> Vec<i32> {
        self.pixels
    }
}

/// Number of pixels for a geometry, rejecting zero and overflowing sizes.
pub(crate) fn pixel_count(width: u32, height: u32) -> TextureResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&count| count > 0)
        .ok_or(TextureError::InvalidDimensions {
            width,
            height,
            pixels: 0,
        })
}
