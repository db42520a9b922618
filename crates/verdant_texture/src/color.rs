//! # Color Values
//!
//! 8-bit RGBA color with saturating arithmetic.
//!
//! ## Packing
//!
//! The engine reads bitmaps as arrays of `i32` whose bytes are laid out
//! `[blue, green, red, alpha]` from least to most significant:
//!
//! ```text
//! bit 31      24 23      16 15       8 7        0
//!     | alpha  |   red    |  green   |   blue   |
//! ```
//!
//! Any color with `alpha >= 128` therefore packs to a negative value.

/// RGBA color, 8 bits per channel.
///
/// Every constructor and every arithmetic operation "corrects" its result:
/// the real-valued channel is clamped to `[0, 255]` and truncated toward
/// zero, so the stored channels are always valid bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel (255 = opaque).
    pub alpha: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Creates a color from RGBA bytes.
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from RGB bytes.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Creates a color from real-valued channels, correcting each one.
    #[must_use]
    pub fn from_channels(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::rgba(
            correct(red),
            correct(green),
            correct(blue),
            correct(alpha),
        )
    }

    /// Adds `amount` to red, green and blue. Alpha is untouched.
    ///
    /// `amount` may be fractional or negative; the result is corrected.
    #[must_use]
    pub fn saturating_add(self, amount: f64) -> Self {
        Self::rgba(
            correct(f64::from(self.red) + amount),
            correct(f64::from(self.green) + amount),
            correct(f64::from(self.blue) + amount),
            self.alpha,
        )
    }

    /// Subtracts `amount` from red, green and blue. Alpha is untouched.
    #[must_use]
    pub fn saturating_sub(self, amount: f64) -> Self {
        self.saturating_add(-amount)
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Packs into the engine's signed 32-bit pixel format.
    #[must_use]
    pub const fn pack(self) -> i32 {
        i32::from_le_bytes([self.blue, self.green, self.red, self.alpha])
    }

    /// Inverse of [`Color::pack`].
    #[must_use]
    pub const fn from_packed(packed: i32) -> Self {
        let [blue, green, red, alpha] = packed.to_le_bytes();
        Self::rgba(red, green, blue, alpha)
    }

    /// Converts to `[r, g, b, a]` bytes (image crate order).
    #[must_use]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Clamps a real channel value to `[0, 255]` and truncates it.
///
/// NaN corrects to 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn correct(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0) as u8
}
