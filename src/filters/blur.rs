//! Gaussian blur.
//!
//! Separable 2-pass convolution: the first pass runs down each column, the
//! second along each row of the first pass's output. Indices past the border
//! are clamped. Channels are accumulated in 0.0-1.0 space and each pass
//! stores an 8-bit result.

use ndarray::Array2;

use super::core::{clamp_index, gaussian_kernel_1d};
use crate::image::{Color, RasterImage};

/// Apply Gaussian blur.
///
/// # Arguments
/// * `image` - Source image
/// * `sigma` - Standard deviation of the kernel; must be positive
///
/// # Returns
/// Blurred image with the same dimensions and headers
pub fn gaussian_blur(image: &RasterImage, sigma: f64) -> RasterImage {
    let kernel = gaussian_kernel_1d(sigma);
    let half = (kernel.len() / 2) as isize;
    let input = image.pixels();
    let (height, width) = input.dim();

    // Vertical pass
    let temp = Array2::from_shape_fn((height, width), |(y, x)| {
        weighted_sum(&kernel, |ki| {
            input[[clamp_index(y, ki as isize - half, height), x]]
        })
    });

    // Horizontal pass
    let output = Array2::from_shape_fn((height, width), |(y, x)| {
        weighted_sum(&kernel, |ki| {
            temp[[y, clamp_index(x, ki as isize - half, width)]]
        })
    });

    image.with_pixels(output)
}

/// Weighted sum of the pixels `sample(0..kernel.len())`.
fn weighted_sum<F>(kernel: &[f64], sample: F) -> Color
where
    F: Fn(usize) -> Color,
{
    let (mut r, mut g, mut b) = (0.0f64, 0.0f64, 0.0f64);
    for (ki, &kv) in kernel.iter().enumerate() {
        let c = sample(ki);
        r += c.red as f64 / 255.0 * kv;
        g += c.green as f64 / 255.0 * kv;
        b += c.blue as f64 / 255.0 * kv;
    }
    Color::rgb(to_u8(r), to_u8(g), to_u8(b))
}

#[inline]
fn to_u8(v: f64) -> u8 {
    (v.min(1.0) * 255.0).round() as u8
}
