//! Grayscale conversion filter.
//!
//! Uses the ITU-R BT.601 luma weights `0.299 R + 0.587 G + 0.114 B`,
//! truncated toward zero. The sum is evaluated in integer thousandths: the
//! result is the exact floor, and gray pixels map to themselves.

use crate::image::{Color, RasterImage};

/// BT.601 luma weights in thousandths.
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// Luma of a single pixel.
#[inline]
pub fn luma(c: Color) -> u8 {
    ((LUMA_R * c.red as u32 + LUMA_G * c.green as u32 + LUMA_B * c.blue as u32) / 1000) as u8
}

/// Convert to grayscale: R = G = B = luma.
pub fn grayscale(image: &RasterImage) -> RasterImage {
    image.with_pixels(image.pixels().mapv(|c| Color::gray(luma(c))))
}
