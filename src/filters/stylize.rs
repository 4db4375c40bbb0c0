//! Voronoi posterization.
//!
//! Seeds are scattered over the image and every pixel is repainted with the
//! source color found under its nearest seed, splitting the image into flat
//! cells. Seed placement comes from a [`SeedSource`] supplied by the caller.

use log::trace;
use ndarray::Array2;
use rand::Rng;

use crate::image::RasterImage;

/// Supplier of seed coordinates for [`voronoi_blur`].
pub trait SeedSource {
    /// Next seed as `(row, col)`, with `row < height` and `col < width`.
    /// Both dimensions are nonzero.
    fn next_seed(&mut self, height: usize, width: usize) -> (usize, usize);
}

/// Uniformly distributed seeds drawn from a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandomSeeds<R>(pub R);

impl<R: Rng> SeedSource for RandomSeeds<R> {
    fn next_seed(&mut self, height: usize, width: usize) -> (usize, usize) {
        (self.0.random_range(0..height), self.0.random_range(0..width))
    }
}

/// Replays a fixed list of seeds, cycling when it runs out.
///
/// Coordinates are reduced modulo the image size so any list is usable with
/// any image.
#[derive(Debug, Clone)]
pub struct FixedSeeds {
    seeds: Vec<(usize, usize)>,
    next: usize,
}

impl FixedSeeds {
    /// Returns `None` if `seeds` is empty.
    pub fn new(seeds: Vec<(usize, usize)>) -> Option<Self> {
        if seeds.is_empty() {
            return None;
        }
        Some(FixedSeeds { seeds, next: 0 })
    }
}

impl SeedSource for FixedSeeds {
    fn next_seed(&mut self, height: usize, width: usize) -> (usize, usize) {
        let (row, col) = self.seeds[self.next % self.seeds.len()];
        self.next += 1;
        (row % height, col % width)
    }
}

/// Posterize into at most `cluster_count` flat regions.
///
/// Draws `cluster_count` seeds (duplicates allowed), then gives each pixel the
/// source color at the seed with the smallest squared distance. Ties go to
/// the seed drawn first. Empty images are returned unchanged.
pub fn voronoi_blur(
    image: &RasterImage,
    cluster_count: u32,
    seeds: &mut dyn SeedSource,
) -> RasterImage {
    let (height, width) = (image.height(), image.width());
    if image.is_empty() || cluster_count == 0 {
        return image.clone();
    }

    let points: Vec<(usize, usize)> = (0..cluster_count)
        .map(|_| seeds.next_seed(height, width))
        .collect();
    trace!("voronoi seeds: {points:?}");

    let input = image.pixels();
    let output = Array2::from_shape_fn((height, width), |(y, x)| {
        let (row, col) = nearest_seed(&points, y, x);
        input[[row, col]]
    });

    image.with_pixels(output)
}

/// First seed with the minimum squared distance to `(y, x)`.
fn nearest_seed(points: &[(usize, usize)], y: usize, x: usize) -> (usize, usize) {
    let mut best = points[0];
    let mut best_dist = u64::MAX;
    for &(row, col) in points {
        let dy = row.abs_diff(y) as u64;
        let dx = col.abs_diff(x) as u64;
        let dist = dy * dy + dx * dx;
        if dist < best_dist {
            best = (row, col);
            best_dist = dist;
        }
    }
    best
}
