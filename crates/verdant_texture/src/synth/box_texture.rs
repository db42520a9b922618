//! # Box Textures
//!
//! Bordered gradient tiles used for UI chrome (buttons, panels, HUD).
//!
//! ## Bands
//!
//! Every pixel falls into the first matching band, checked from the edge
//! inward. With `bw` the border width, `d1 = bw / 4` and `d2 = 3 * bw / 4`:
//!
//! ```text
//! near edge                                                 far edge
//! | outer | border      | inner ring | interior ... | inner ring | border | outer |
//!   x<d1    d1<=x<=d2     d2<x<bw                     w-bw-1<x<w-d2  x>=w-d2  x>w-d1-1
//! ```
//!
//! The inner ring uses strict comparisons on both sides while the border
//! band is inclusive, so the far side ends up with one pixel less of border
//! and one pixel more of inner ring than the near side. Textures already
//! shipped with this layout; keep it.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::TextureResult;

/// Colors and geometry of a box texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    /// Tint the interior fades from (top-left corner).
    pub top_left: Color,
    /// Tint the interior fades toward (bottom-right corner).
    pub bottom_right: Color,
    /// Border band color.
    pub border: Color,
    /// How much darker the outer ring is than the border.
    pub outer_darkening: f64,
    /// Total border thickness in pixels.
    pub border_width: u32,
}

impl BoxStyle {
    /// Color of the outermost ring and the inner ring.
    #[must_use]
    pub fn outer_border(&self) -> Color {
        self.border.saturating_sub(self.outer_darkening)
    }

    /// Returns the style with the two tints exchanged.
    #[must_use]
    pub const fn swapped_tints(self) -> Self {
        Self {
            top_left: self.bottom_right,
            bottom_right: self.top_left,
            ..self
        }
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            top_left: Color::rgb(0, 0, 150),
            bottom_right: Color::rgb(0, 0, 32),
            border: Color::rgb(180, 180, 180),
            outer_darkening: 80.0,
            border_width: 6,
        }
    }
}

/// Which band of the box a pixel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Within `d1` of an edge.
    Outer,
    /// Between `d1` and `d2`.
    Border,
    /// Between `d2` and the border width.
    InnerRing,
    /// Gradient fill.
    Interior,
}

/// Classifies pixel `(x, y)` of a `width` x `height` box.
#[must_use]
pub fn classify(x: u32, y: u32, width: u32, height: u32, border_width: u32) -> Band {
    let bw = f64::from(border_width);
    let d1 = 0.25 * bw;
    let d2 = 0.75 * bw;
    let (x, y) = (f64::from(x), f64::from(y));
    let (w, h) = (f64::from(width), f64::from(height));

    if x < d1 || x > w - d1 - 1.0 || y < d1 || y > h - d1 - 1.0 {
        Band::Outer
    } else if (d1..=d2).contains(&x) || x >= w - d2 || (d1..=d2).contains(&y) || y >= h - d2 {
        Band::Border
    } else if (x > d2 && x < bw)
        || (x < w - d2 && x > w - bw - 1.0)
        || (y > d2 && y < bw)
        || (y < h - d2 && y > h - bw - 1.0)
    {
        Band::InnerRing
    } else {
        Band::Interior
    }
}

/// Interior gradient at `(x, y)`.
///
/// Weights are `1 - (x + y) / max_dist` for the top-left tint and
/// `1 - (w - x + h + y) / max_dist` for the bottom-right tint, with
/// `max_dist = w + h - 2`. A box of 1x1 has no distance to spread over and
/// is filled with the top-left tint.
#[must_use]
pub fn diagonal_blend(style: &BoxStyle, x: u32, y: u32, width: u32, height: u32) -> Color {
    let max_dist = f64::from(width) + f64::from(height) - 2.0;
    if max_dist <= 0.0 {
        return style.top_left.with_alpha(255);
    }

    let (x, y) = (f64::from(x), f64::from(y));
    let (w, h) = (f64::from(width), f64::from(height));
    let p_top_left = 1.0 - (x + y) / max_dist;
    let p_bottom_right = 1.0 - (w - x + h + y) / max_dist;

    let mix = |a: u8, b: u8| p_top_left * f64::from(a) + p_bottom_right * f64::from(b);
    let (tl, br) = (style.top_left, style.bottom_right);
    Color::from_channels(
        mix(tl.red, br.red),
        mix(tl.green, br.green),
        mix(tl.blue, br.blue),
        255.0,
    )
}

/// Synthesizes a box with the default style.
///
/// # Errors
///
/// [`crate::TextureError::InvalidDimensions`] for a zero or overflowing size.
pub fn synthesize_box(width: u32, height: u32) -> TextureResult<PixelBuffer> {
    synthesize_box_with(&BoxStyle::default(), width, height)
}

/// Synthesizes a box with a custom style.
///
/// # Errors
///
/// [`crate::TextureError::InvalidDimensions`] for a zero or overflowing size.
pub fn synthesize_box_with(
    style: &BoxStyle,
    width: u32,
    height: u32,
) -> TextureResult<PixelBuffer> {
    let outer = style.outer_border();
    PixelBuffer::generate(width, height, |x, y| {
        match classify(x, y, width, height, style.border_width) {
            Band::Outer | Band::InnerRing => outer,
            Band::Border => style.border,
            Band::Interior => diagonal_blend(style, x, y, width, height),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTER: Color = Color::rgb(100, 100, 100);
    const BORDER: Color = Color::rgb(180, 180, 180);

    fn row_bands(width: u32) -> Vec<Band> {
        (0..width).map(|x| classify(x, 16, width, 32, 6)).collect()
    }

    #[test]
    fn test_default_outer_border_color() {
        assert_eq!(BoxStyle::default().outer_border(), OUTER);
    }

    #[test]
    fn test_near_edge_bands() {
        let bands = row_bands(64);
        assert_eq!(
            bands[..7],
            [
                Band::Outer,
                Band::Outer,
                Band::Border,
                Band::Border,
                Band::Border,
                Band::InnerRing,
                Band::Interior,
            ]
        );
    }

    #[test]
    fn test_far_edge_bands_are_shifted() {
        let bands = row_bands(64);
        assert_eq!(
            bands[57..],
            [
                Band::Interior,
                Band::InnerRing,
                Band::InnerRing,
                Band::Border,
                Band::Border,
                Band::Outer,
                Band::Outer,
            ]
        );
    }

    #[test]
    fn test_interior_pixel_value() {
        let buffer = synthesize_box(64, 32).unwrap();

        // p_tl = 1 - 12/94, p_br = 1 - 96/94; blue = 130.17
        assert_eq!(buffer.get(6, 6), Some(Color::rgb(0, 0, 130)));
    }

    #[test]
    fn test_band_colors() {
        let buffer = synthesize_box(64, 32).unwrap();
        assert_eq!(buffer.get(0, 16), Some(OUTER));
        assert_eq!(buffer.get(3, 16), Some(BORDER));
        assert_eq!(buffer.get(5, 16), Some(OUTER));
        assert_eq!(buffer.get(61, 16), Some(BORDER));
        assert_eq!(buffer.get(58, 16), Some(OUTER));
    }

    #[test]
    fn test_interior_is_opaque() {
        let style = BoxStyle {
            top_left: Color::rgba(255, 0, 0, 0),
            ..BoxStyle::default()
        };
        let color = diagonal_blend(&style, 10, 10, 40, 40);
        assert_eq!(color.alpha, 255);
    }

    #[test]
    fn test_degenerate_size_uses_top_left_tint() {
        let style = BoxStyle::default();
        assert_eq!(diagonal_blend(&style, 0, 0, 1, 1), style.top_left);

        // A 1x1 box is all outer ring
        let buffer = synthesize_box(1, 1).unwrap();
        assert_eq!(buffer.pixels(), &[OUTER.pack()]);
    }

    #[test]
    fn test_small_boxes_are_all_border() {
        let buffer = synthesize_box(12, 12).unwrap();
        let interior = (0..12)
            .flat_map(|y| (0..12).map(move |x| (x, y)))
            .filter(|&(x, y)| classify(x, y, 12, 12, 6) == Band::Interior)
            .count();
        assert_eq!(interior, 0);
        assert_eq!(buffer.pixels().len(), 144);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(synthesize_box(0, 10).is_err());
        assert!(synthesize_box(10, 0).is_err());
    }
}
