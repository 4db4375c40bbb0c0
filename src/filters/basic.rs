//! Basic image operations that need no spatial context:
//! - Crop
//! - Negative (invert)

use log::warn;
use ndarray::{s, Array2};

use crate::image::{resize_headers, Color, RasterImage};

/// Crop to `width` columns and `height` rows.
///
/// Columns are taken from the left edge and rows from the end of the stored
/// row order (the bottom of a conventional bottom-up bitmap). A negative or
/// oversized request on either axis selects the full source extent on both.
/// Both size fields in the headers are recomputed.
pub fn crop(image: &RasterImage, width: i32, height: i32) -> RasterImage {
    let (src_height, src_width) = (image.height(), image.width());

    let fits = width >= 0
        && height >= 0
        && width as usize <= src_width
        && height as usize <= src_height;
    let (width, height) = if fits {
        (width as usize, height as usize)
    } else {
        warn!("crop {width}x{height} outside {src_width}x{src_height} image, keeping full extent");
        (src_width, src_height)
    };

    let pixels = image
        .pixels()
        .slice(s![src_height - height.., ..width])
        .to_owned();

    let mut file_header = *image.file_header();
    let mut info_header = *image.info_header();
    resize_headers(&mut file_header, &mut info_header, width, height);

    RasterImage::new(file_header, info_header, pixels)
}

/// Invert every channel: `255 - c`.
pub fn negative(image: &RasterImage) -> RasterImage {
    let pixels: Array2<Color> = image.pixels().mapv(|c| Color {
        blue: 255 - c.blue,
        green: 255 - c.green,
        red: 255 - c.red,
    });
    image.with_pixels(pixels)
}
