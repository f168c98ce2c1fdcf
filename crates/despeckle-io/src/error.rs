//! Errors raised while reading or writing images

use thiserror::Error;

/// Why an image could not be read or written.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Magic number not recognised, or the codec feature is off
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Header or raster inconsistent with itself (short raster, oversized dimensions)
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// Raised by the `png` or `jpeg-decoder` crate
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Raised by the `png` or `jpeg-encoder` crate
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded dimensions the container rejects
    #[error("core error: {0}")]
    Core(#[from] despeckle_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;
