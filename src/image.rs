//! In-memory image representation.
//!
//! A [`RasterImage`] owns both header records and a row-major grid of
//! [`Color`] values. Rows keep the order they had in the file (usually
//! bottom-up). Images are never mutated after construction; filters build new
//! ones.

use ndarray::{Array2, ArrayView2};

use crate::headers::{padded_row_len, FileHeader, InfoHeader, HEADERS_LEN};

/// A 24-bit pixel. Field order matches the on-disk `B, G, R` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { blue, green, red }
    }

    /// Same value in all three channels.
    pub const fn gray(value: u8) -> Self {
        Color::rgb(value, value, value)
    }

    /// Channels in wire order.
    pub fn to_bgr(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    pub fn from_bgr([blue, green, red]: [u8; 3]) -> Self {
        Color { blue, green, red }
    }
}

/// Decoded BMP image: headers plus pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    file_header: FileHeader,
    info_header: InfoHeader,
    pixels: Array2<Color>,
}

impl RasterImage {
    /// Assemble an image from parts. Headers are kept verbatim; keeping them
    /// consistent with `pixels` is the caller's job.
    pub fn new(file_header: FileHeader, info_header: InfoHeader, pixels: Array2<Color>) -> Self {
        RasterImage {
            file_header,
            info_header,
            pixels,
        }
    }

    /// Build an image with freshly computed 24-bit headers for `pixels`.
    pub fn from_pixels(pixels: Array2<Color>) -> Self {
        let (rows, cols) = pixels.dim();
        let mut file_header = FileHeader {
            signature: *b"BM",
            pixel_data_offset: HEADERS_LEN as u32,
            ..Default::default()
        };
        let mut info_header = InfoHeader {
            header_size: 40,
            planes: 1,
            bits_per_pixel: 24,
            ..Default::default()
        };
        resize_headers(&mut file_header, &mut info_header, cols, rows);
        RasterImage::new(file_header, info_header, pixels)
    }

    /// New image with the same headers and a different grid of equal size.
    pub fn with_pixels(&self, pixels: Array2<Color>) -> Self {
        debug_assert_eq!(pixels.dim(), self.pixels.dim());
        RasterImage::new(self.file_header, self.info_header, pixels)
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    pub fn pixels(&self) -> ArrayView2<'_, Color> {
        self.pixels.view()
    }

    pub fn into_pixels(self) -> Array2<Color> {
        self.pixels
    }

    /// Number of rows in the grid.
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of columns in the grid.
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(row, col)` in stored row order.
    pub fn pixel(&self, row: usize, col: usize) -> Color {
        self.pixels[[row, col]]
    }
}

/// Rewrite size-related header fields for a `width` x `height` grid.
pub(crate) fn resize_headers(
    file_header: &mut FileHeader,
    info_header: &mut InfoHeader,
    width: usize,
    height: usize,
) {
    let image_size = height * padded_row_len(width);
    info_header.width = width as i32;
    info_header.height = height as i32;
    info_header.image_size = image_size as u32;
    file_header.file_size = (HEADERS_LEN + image_size) as u32;
}
