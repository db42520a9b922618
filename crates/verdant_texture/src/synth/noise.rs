//! # Noise Textures
//!
//! Ground tiles (water, grass, sand, ...) made by perturbing a base color
//! with one Gaussian draw per pixel.
//!
//! Draws come from an injected [`GaussianSource`], so a seeded source
//! produces the same tile every time.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::{TextureError, TextureResult};

/// Source of normally distributed draws.
pub trait GaussianSource {
    /// Draws from `Normal(0, std_dev)`.
    fn gaussian(&mut self, std_dev: f64) -> f64;
}

impl<R: Rng + ?Sized> GaussianSource for R {
    #[inline]
    fn gaussian(&mut self, std_dev: f64) -> f64 {
        let z: f64 = self.sample(StandardNormal);
        z * std_dev
    }
}

/// Seed for per-texture noise streams.
///
/// Every texture name gets its own stream derived from this seed, so the
/// pixels of one tile never depend on which tiles were generated before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureSeed(u64);

impl TextureSeed {
    /// Creates a new texture seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives the stream seed for a texture name.
    #[must_use]
    pub fn derive(self, name: &str) -> u64 {
        // FNV-1a over the name, then mixed into the seed
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in name.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        let mut mixed = self.0 ^ hash;
        mixed = mixed.wrapping_mul(0x517c_c1b7_2722_0a95);
        mixed ^ (mixed >> 32)
    }
}

impl Default for TextureSeed {
    fn default() -> Self {
        Self(0x7E55_E11A_7E0B_1A5E)
    }
}

/// Synthesizes a noise tile.
///
/// For each pixel, in row-major order, draws `g ~ Normal(0, variance)` and
/// brightens `base` by `255 * g` (or darkens it by `255 * -g` when `g < 0`).
///
/// # Errors
///
/// - [`TextureError::InvalidDimensions`] for a zero or overflowing size
/// - [`TextureError::InvalidVariance`] if `variance` is negative or not finite
pub fn synthesize_noise<G: GaussianSource + ?Sized>(
    width: u32,
    height: u32,
    base: Color,
    variance: f64,
    source: &mut G,
) -> TextureResult<PixelBuffer> {
    if !variance.is_finite() || variance < 0.0 {
        return Err(TextureError::InvalidVariance(variance));
    }

    PixelBuffer::generate(width, height, |_, _| {
        let g = source.gaussian(variance);
        if g < 0.0 {
            base.saturating_sub(255.0 * -g)
        } else {
            base.saturating_add(255.0 * g)
        }
    })
}
