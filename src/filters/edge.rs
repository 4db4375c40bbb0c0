//! Edge detection filter.
//!
//! The image is converted to grayscale, then convolved with a 4-neighbor
//! Laplacian:
//!
//! ```text
//!  0 -1  0
//! -1  4 -1
//!  0 -1  0
//! ```
//!
//! Output is binary: white where the response exceeds the threshold, black
//! elsewhere.

use ndarray::Array2;

use super::core::cross_kernel_at;
use super::grayscale::grayscale;
use crate::image::{Color, RasterImage};

const LAPLACIAN_CENTER: i32 = 4;

/// Detect edges, marking pixels whose Laplacian response is `> threshold`.
pub fn edge_detection(image: &RasterImage, threshold: i32) -> RasterImage {
    let gray = grayscale(image);
    let input = gray.pixels();
    let (height, width) = input.dim();

    let output = Array2::from_shape_fn((height, width), |(y, x)| {
        // R = G = B after grayscale, so any channel works
        let response = cross_kernel_at(input, y, x, LAPLACIAN_CENTER, |c: &Color| c.red);
        if response > threshold {
            Color::WHITE
        } else {
            Color::BLACK
        }
    });

    image.with_pixels(output)
}
