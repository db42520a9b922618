//! # Texture Synthesizers
//!
//! Pure functions from generation parameters to [`PixelBuffer`]s.
//!
//! - `box_texture`: bordered gradient tiles, fully deterministic
//! - `noise`: Gaussian-perturbed tiles, deterministic given the draws
//!
//! [`PixelBuffer`]: crate::PixelBuffer

pub mod box_texture;
pub mod noise;

pub use box_texture::{synthesize_box, synthesize_box_with, Band, BoxStyle};
pub use noise::{synthesize_noise, GaussianSource, TextureSeed};
