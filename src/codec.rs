//! BMP codec for uncompressed 24-bit images.
//!
//! ## Layout
//!
//! | Block | Bytes | Contents |
//! |-------|-------|----------|
//! | File header | 14 | signature, file size, reserved x2, pixel offset |
//! | Info header | 40 | size, width, height, planes, bpp, compression, ... |
//! | Pixels | rows * padded row | `B, G, R` per pixel, rows padded to 4 bytes |
//!
//! Rows are read and written in stored order. A negative height is not taken
//! to mean top-down storage; only its magnitude is used as the row count.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use ndarray::Array2;

use crate::error::{DecodeError, Error, Result};
use crate::headers::{
    padded_row_len, row_padding, FileHeader, InfoHeader, FILE_HEADER_LEN, HEADERS_LEN,
    INFO_HEADER_LEN,
};
use crate::image::{Color, RasterImage};

const SUPPORTED_BITS_PER_PIXEL: u16 = 24;

// ============================================================================
// Decode
// ============================================================================

/// Decode a complete BMP file held in memory.
pub fn decode(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    if bytes.len() < HEADERS_LEN {
        return Err(DecodeError::TooShort { len: bytes.len() });
    }

    let mut file_raw = [0u8; FILE_HEADER_LEN];
    file_raw.copy_from_slice(&bytes[..FILE_HEADER_LEN]);
    let mut info_raw = [0u8; INFO_HEADER_LEN];
    info_raw.copy_from_slice(&bytes[FILE_HEADER_LEN..HEADERS_LEN]);

    let file_header = FileHeader::from(file_raw);
    let info_header = InfoHeader::from(info_raw);

    if file_header.file_size as usize > bytes.len() {
        return Err(DecodeError::SizeMismatch {
            declared: file_header.file_size,
            actual: bytes.len(),
        });
    }
    if info_header.bits_per_pixel != SUPPORTED_BITS_PER_PIXEL {
        return Err(DecodeError::UnsupportedBitDepth(info_header.bits_per_pixel));
    }

    let (rows, cols) = (info_header.rows(), info_header.cols());
    let stride = padded_row_len(cols);
    let data = &bytes[HEADERS_LEN..];
    let needed = rows.saturating_mul(stride);
    if data.len() < needed {
        return Err(DecodeError::Truncated {
            needed,
            actual: data.len(),
        });
    }

    let mut pixels = Array2::<Color>::default((rows, cols));
    if stride > 0 {
        for (row, chunk) in data.chunks_exact(stride).take(rows).enumerate() {
            // Trailing padding bytes of `chunk` are ignored.
            for (col, px) in chunk[..cols * 3].chunks_exact(3).enumerate() {
                pixels[[row, col]] = Color::from_bgr([px[0], px[1], px[2]]);
            }
        }
    }

    debug!("decoded {cols}x{rows} bitmap ({} bytes)", bytes.len());
    Ok(RasterImage::new(file_header, info_header, pixels))
}

// ============================================================================
// Encode
// ============================================================================

/// Serialize an image. Headers are written as-is; no consistency checks.
pub fn encode(image: &RasterImage) -> Vec<u8> {
    let cols = image.width();
    let padding = [0u8; 3];
    let pad = row_padding(cols);

    let mut out = Vec::with_capacity(HEADERS_LEN + image.height() * padded_row_len(cols));
    out.extend_from_slice(&<[u8; FILE_HEADER_LEN]>::from(*image.file_header()));
    out.extend_from_slice(&<[u8; INFO_HEADER_LEN]>::from(*image.info_header()));

    for row in image.pixels().rows() {
        for px in row.iter() {
            out.extend_from_slice(&px.to_bgr());
        }
        out.extend_from_slice(&padding[..pad]);
    }

    debug!("encoded {cols}x{} bitmap ({} bytes)", image.height(), out.len());
    out
}

// ============================================================================
// Files
// ============================================================================

/// Read and decode the BMP at `path`. The file is closed before returning.
pub fn read_file(path: impl AsRef<Path>) -> Result<RasterImage> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut f| f.read_to_end(&mut bytes))
        .map_err(io_err)?;

    Ok(decode(&bytes)?)
}

/// Encode `image` and write it to `path`, creating or truncating the file.
pub fn write_file(path: impl AsRef<Path>, image: &RasterImage) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode(image);

    File::create(path)
        .and_then(|f| {
            let mut writer = BufWriter::new(f);
            writer.write_all(&bytes)?;
            writer.flush()
        })
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
}
