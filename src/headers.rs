//! Fixed-layout BMP header records.
//!
//! All multi-byte fields are little-endian and packed without alignment
//! padding. Both records convert losslessly to and from byte arrays, so any
//! field value (including ones inconsistent with the pixel grid) survives a
//! decode/encode round trip untouched.

/// Size of [`FileHeader`] on the wire.
pub const FILE_HEADER_LEN: usize = 14;

/// Size of [`InfoHeader`] on the wire.
pub const INFO_HEADER_LEN: usize = 40;

/// Combined size of both headers; pixel data starts right after.
pub const HEADERS_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN;

#[inline]
fn u16_at(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

#[inline]
fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
fn i32_at(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

// ============================================================================
// File Header
// ============================================================================

/// The 14-byte header at the start of every BMP file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileHeader {
    /// Usually `b"BM"`. Not validated.
    pub signature: [u8; 2],
    /// Declared total size of the file in bytes.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset of the pixel array. Carried verbatim.
    pub pixel_data_offset: u32,
}

impl From<[u8; FILE_HEADER_LEN]> for FileHeader {
    fn from(b: [u8; FILE_HEADER_LEN]) -> Self {
        Self {
            signature: [b[0], b[1]],
            file_size: u32_at(&b, 2),
            reserved1: u16_at(&b, 6),
            reserved2: u16_at(&b, 8),
            pixel_data_offset: u32_at(&b, 10),
        }
    }
}

impl From<FileHeader> for [u8; FILE_HEADER_LEN] {
    fn from(h: FileHeader) -> Self {
        let mut a = [0; FILE_HEADER_LEN];
        a[0..2].copy_from_slice(&h.signature);
        a[2..6].copy_from_slice(&h.file_size.to_le_bytes());
        a[6..8].copy_from_slice(&h.reserved1.to_le_bytes());
        a[8..10].copy_from_slice(&h.reserved2.to_le_bytes());
        a[10..14].copy_from_slice(&h.pixel_data_offset.to_le_bytes());
        a
    }
}

// ============================================================================
// Info Header
// ============================================================================

/// The 40-byte `BITMAPINFOHEADER` that follows the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InfoHeader {
    pub header_size: u32,
    /// Image width in pixels.
    pub width: i32,
    /// Image height in pixels. The sign is not interpreted as a row order.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Size of the padded pixel array in bytes.
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl From<[u8; INFO_HEADER_LEN]> for InfoHeader {
    fn from(b: [u8; INFO_HEADER_LEN]) -> Self {
        Self {
            header_size: u32_at(&b, 0),
            width: i32_at(&b, 4),
            height: i32_at(&b, 8),
            planes: u16_at(&b, 12),
            bits_per_pixel: u16_at(&b, 14),
            compression: u32_at(&b, 16),
            image_size: u32_at(&b, 20),
            x_pixels_per_meter: i32_at(&b, 24),
            y_pixels_per_meter: i32_at(&b, 28),
            colors_used: u32_at(&b, 32),
            colors_important: u32_at(&b, 36),
        }
    }
}

impl From<InfoHeader> for [u8; INFO_HEADER_LEN] {
    fn from(h: InfoHeader) -> Self {
        let mut a = [0; INFO_HEADER_LEN];
        a[0..4].copy_from_slice(&h.header_size.to_le_bytes());
        a[4..8].copy_from_slice(&h.width.to_le_bytes());
        a[8..12].copy_from_slice(&h.height.to_le_bytes());
        a[12..14].copy_from_slice(&h.planes.to_le_bytes());
        a[14..16].copy_from_slice(&h.bits_per_pixel.to_le_bytes());
        a[16..20].copy_from_slice(&h.compression.to_le_bytes());
        a[20..24].copy_from_slice(&h.image_size.to_le_bytes());
        a[24..28].copy_from_slice(&h.x_pixels_per_meter.to_le_bytes());
        a[28..32].copy_from_slice(&h.y_pixels_per_meter.to_le_bytes());
        a[32..36].copy_from_slice(&h.colors_used.to_le_bytes());
        a[36..40].copy_from_slice(&h.colors_important.to_le_bytes());
        a
    }
}

impl InfoHeader {
    /// Number of pixel rows, ignoring the sign of `height`.
    pub fn rows(&self) -> usize {
        self.height.unsigned_abs() as usize
    }

    /// Number of pixel columns, ignoring the sign of `width`.
    pub fn cols(&self) -> usize {
        self.width.unsigned_abs() as usize
    }
}

/// Zero bytes appended to a row of `cols` pixels on the wire.
pub fn row_padding(cols: usize) -> usize {
    match (cols * 3) % 4 {
        0 => 0,
        rem => 4 - rem,
    }
}

/// Bytes one stored row occupies, padding included.
pub fn padded_row_len(cols: usize) -> usize {
    cols * 3 + row_padding(cols)
}
