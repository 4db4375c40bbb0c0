//! Error types surfaced by the codec and file helpers.

use std::path::PathBuf;

/// Reasons a byte buffer cannot be decoded into a [`RasterImage`](crate::RasterImage).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("input is {len} bytes, shorter than the 54 bytes of BMP headers")]
    TooShort { len: usize },

    #[error("header declares {declared} bytes but only {actual} are available")]
    SizeMismatch { declared: u32, actual: usize },

    #[error("unsupported bit depth {0}, only 24 bits per pixel can be decoded")]
    UnsupportedBitDepth(u16),

    #[error("pixel data needs {needed} bytes but only {actual} are available")]
    Truncated { needed: usize, actual: usize },
}

/// Crate-level error: decoding failures plus file I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
