//! BMP Filters
//!
//! Decodes uncompressed 24-bit BMP images, runs them through a chain of
//! pixel filters, and encodes the result back to BMP.
//!
//! ## Image Format
//! Images are held as a [`RasterImage`]: both BMP header records plus a
//! `(rows, cols)` grid of [`Color`] in the file's stored row order. Row
//! padding exists only on the wire.
//!
//! ## Filter Architecture
//! Every [`Filter`] reads a borrowed image and returns a new one; a
//! [`FilterPipeline`] folds them in command order, dropping each intermediate
//! image once the next exists. Only crop changes dimensions.
//!
//! ```no_run
//! use bmp_filters::{codec, Filter, FilterPipeline, RandomSeeds};
//!
//! # fn main() -> bmp_filters::Result<()> {
//! let image = codec::read_file("in.bmp")?;
//! let pipeline = FilterPipeline::new(vec![Filter::Grayscale, Filter::GaussianBlur { sigma: 1.5 }]);
//! let image = pipeline.apply(image, &mut RandomSeeds(rand::rng()));
//! codec::write_file("out.bmp", &image)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod codec;
pub mod error;
pub mod filters;
pub mod headers;
pub mod image;
pub mod pipeline;

pub use error::{DecodeError, Error, Result};
pub use filters::{Filter, FixedSeeds, RandomSeeds, SeedSource};
pub use headers::{FileHeader, InfoHeader};
pub use image::{Color, RasterImage};
pub use pipeline::FilterPipeline;
