//! Filter modules for image processing effects.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Immutable input** - Filters read a borrowed image and build a new one
//! - **Headers follow the grid** - Only [`Filter::Crop`] changes dimensions,
//!   and it rewrites the size fields to match
//! - **Edge replication** - Convolutions clamp out-of-range neighbors to the
//!   nearest valid pixel
//! - **Explicit randomness** - [`Filter::VoronoiBlur`] draws seeds from a
//!   caller-provided [`SeedSource`]
//!
//! ## Filter Categories
//!
//! - **Geometric**: crop
//! - **Pixel-wise**: grayscale, negative
//! - **Convolution**: sharpen, edge detection, gaussian blur
//! - **Stylize**: voronoi posterization
//!
//! Parameters are assumed validated by the caller (see [`crate::cli`]).

pub mod basic;
pub mod blur;
pub mod core;
pub mod edge;
pub mod grayscale;
pub mod sharpen;
pub mod stylize;

use std::fmt;

use crate::image::RasterImage;

pub use stylize::{FixedSeeds, RandomSeeds, SeedSource};

/// One step of a filter chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Keep `width` left columns and `height` bottom rows.
    Crop { width: i32, height: i32 },
    Grayscale,
    Negative,
    Sharpening,
    EdgeDetection { threshold: i32 },
    GaussianBlur { sigma: f64 },
    VoronoiBlur { cluster_count: u32 },
}

impl Filter {
    /// Apply this filter, producing a new image.
    ///
    /// `seeds` is only consulted by [`Filter::VoronoiBlur`].
    pub fn apply(&self, image: &RasterImage, seeds: &mut dyn SeedSource) -> RasterImage {
        match *self {
            Filter::Crop { width, height } => basic::crop(image, width, height),
            Filter::Grayscale => grayscale::grayscale(image),
            Filter::Negative => basic::negative(image),
            Filter::Sharpening => sharpen::sharpen(image),
            Filter::EdgeDetection { threshold } => edge::edge_detection(image, threshold),
            Filter::GaussianBlur { sigma } => blur::gaussian_blur(image, sigma),
            Filter::VoronoiBlur { cluster_count } => {
                stylize::voronoi_blur(image, cluster_count, seeds)
            }
        }
    }

    /// Command-line name of this filter, without the leading dash.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Crop { .. } => "crop",
            Filter::Grayscale => "gs",
            Filter::Negative => "neg",
            Filter::Sharpening => "sharp",
            Filter::EdgeDetection { .. } => "edge",
            Filter::GaussianBlur { .. } => "blur",
            Filter::VoronoiBlur { .. } => "voronoi",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.name())?;
        match self {
            // Command-line order is height first
            Filter::Crop { width, height } => write!(f, " {height} {width}"),
            Filter::EdgeDetection { threshold } => write!(f, " {threshold}"),
            Filter::GaussianBlur { sigma } => write!(f, " {sigma}"),
            Filter::VoronoiBlur { cluster_count } => write!(f, " {cluster_count}"),
            Filter::Grayscale | Filter::Negative | Filter::Sharpening => Ok(()),
        }
    }
}
