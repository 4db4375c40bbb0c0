//! Core utilities shared by the convolution filters.
//!
//! This module provides:
//! - Edge-replicated neighbor lookup
//! - 3x3 cross-shaped kernel evaluation
//! - Gaussian kernel generation

use ndarray::ArrayView2;

/// Clamp `index + offset` into `0..len` (edge replication).
#[inline]
pub fn clamp_index(index: usize, offset: isize, len: usize) -> usize {
    (index as isize + offset).clamp(0, len as isize - 1) as usize
}

/// Evaluate a 3x3 kernel whose corners are zero:
///
/// ```text
///  0 -1  0
/// -1  c -1
///  0 -1  0
/// ```
///
/// `channel` extracts the sampled value from each grid element. Neighbors
/// outside the grid are replaced by the nearest in-bounds element.
pub fn cross_kernel_at<T, F>(grid: ArrayView2<T>, y: usize, x: usize, center: i32, channel: F) -> i32
where
    F: Fn(&T) -> u8,
{
    let (height, width) = grid.dim();
    let at = |dy: isize, dx: isize| {
        let sy = clamp_index(y, dy, height);
        let sx = clamp_index(x, dx, width);
        channel(&grid[[sy, sx]]) as i32
    };

    center * at(0, 0) - at(-1, 0) - at(1, 0) - at(0, -1) - at(0, 1)
}

/// Generate a 1D Gaussian kernel of radius `floor(3 * sigma)`.
///
/// Samples the normal density at integer offsets `-r..=r`, then renormalizes
/// so the finite window sums to 1.
///
/// # Arguments
/// * `sigma` - Standard deviation; must be positive
///
/// # Returns
/// Kernel of length `2r + 1`
pub fn gaussian_kernel_1d(sigma: f64) -> Vec<f64> {
    let radius = (sigma * 3.0) as i64;
    let norm = 1.0 / (sigma * (2.0 * std::f64::consts::PI).sqrt());

    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|i| {
            let x = i as f64;
            norm * (-(x * x) / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    // Normalize
    let sum: f64 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_clamp_index_replicates_edges() {
        assert_eq!(clamp_index(0, -1, 5), 0);
        assert_eq!(clamp_index(4, 1, 5), 4);
        assert_eq!(clamp_index(2, 1, 5), 3);
        assert_eq!(clamp_index(0, 3, 1), 0);
    }

    #[test]
    fn test_cross_kernel_flat_area() {
        let grid = Array2::<u8>::from_elem((3, 3), 10);
        assert_eq!(cross_kernel_at(grid.view(), 1, 1, 4, |v| *v), 0);
        assert_eq!(cross_kernel_at(grid.view(), 0, 0, 5, |v| *v), 10);
    }

    #[test]
    fn test_gaussian_kernel_sums_to_one() {
        for sigma in [0.4, 1.0, 2.5] {
            let kernel = gaussian_kernel_1d(sigma);
            let radius = (sigma * 3.0) as usize;

            assert_eq!(kernel.len(), 2 * radius + 1);
            assert!((kernel.iter().sum::<f64>() - 1.0).abs() < 1e-12);
            assert!(kernel[radius] >= kernel[0]);
        }
    }
}
