//! Sharpen filter.
//!
//! Convolves every channel with
//!
//! ```text
//!  0 -1  0
//! -1  5 -1
//!  0 -1  0
//! ```
//!
//! Border pixels reuse their nearest in-bounds neighbors. Results are clamped
//! to 0-255.

use ndarray::Array2;

use super::core::cross_kernel_at;
use crate::image::{Color, RasterImage};

const SHARPEN_CENTER: i32 = 5;

/// Apply the 3x3 sharpening kernel.
pub fn sharpen(image: &RasterImage) -> RasterImage {
    let input = image.pixels();
    let (height, width) = input.dim();

    let channel = |y: usize, x: usize, pick: fn(&Color) -> u8| {
        cross_kernel_at(input, y, x, SHARPEN_CENTER, pick).clamp(0, 255) as u8
    };

    let output = Array2::from_shape_fn((height, width), |(y, x)| Color {
        blue: channel(y, x, |c| c.blue),
        green: channel(y, x, |c| c.green),
        red: channel(y, x, |c| c.red),
    });

    image.with_pixels(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharpen_flat_is_unchanged() {
        let img = RasterImage::from_pixels(Array2::from_elem((4, 4), Color::rgb(90, 120, 200)));

        let result = sharpen(&img);

        assert_eq!(result, img);
    }

    #[test]
    fn test_sharpen_boosts_and_clamps_point() {
        let mut pixels = Array2::from_elem((3, 3), Color::gray(100));
        pixels[[1, 1]] = Color::gray(200);
        let img = RasterImage::from_pixels(pixels);

        let result = sharpen(&img);

        // 5 * 200 - 4 * 100 = 600 -> 255
        assert_eq!(result.pixel(1, 1), Color::gray(255));
        // 5 * 100 - 200 - 100 - 100 - 100 = 0 (edge neighbors replicate)
        assert_eq!(result.pixel(0, 1), Color::gray(0));
        // Corner: 5 * 100 - 4 * 100 = 100
        assert_eq!(result.pixel(0, 0), Color::gray(100));
    }
}
