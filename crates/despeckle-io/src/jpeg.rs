//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Supports 8-bit grayscale and 24-bit RGB; alpha is
//! dropped on write because JFIF has no alpha channel.

use crate::{IoError, IoResult, raster_len};
use despeckle_core::{ImageFormat, Pix, PixelDepth, color};
use jpeg_decoder::PixelFormat;
use log::debug;
use std::io::{Read, Write};

/// Quality used by [`write_jpeg`] when the caller does not pick one.
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// A `Pix` at 8 bpp (grayscale) or 32 bpp (RGB, spp = 3).
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG info missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let (depth, samples) = match info.pixel_format {
        PixelFormat::L8 => (PixelDepth::Bit8, 1),
        PixelFormat::RGB24 => (PixelDepth::Bit32, 3),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };
    debug!("JPEG {}x{} {:?}", width, height, info.pixel_format);

    let expected = raster_len(width, height, samples)?;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} < {}",
            data.len(),
            expected
        )));
    }

    let mut pix_mut = Pix::new(width, height, depth)?.to_mut();
    pix_mut.set_informat(ImageFormat::Jpeg);

    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize * width as usize + x as usize) * samples;
            let val = if samples == 1 {
                data[idx] as u32
            } else {
                color::compose_rgb(data[idx], data[idx + 1], data[idx + 2])
            };
            pix_mut.set_pixel_unchecked(x, y, val);
        }
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as baseline JPEG.
///
/// # Arguments
/// * `pix` - The image to encode (8 or 32 bpp)
/// * `writer` - Destination writer
/// * `quality` - Encoder quality in 1..=100
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W, quality: u8) -> IoResult<()> {
    let width = u16::try_from(pix.width())
        .map_err(|_| IoError::EncodeError(format!("JPEG width {} too large", pix.width())))?;
    let height = u16::try_from(pix.height())
        .map_err(|_| IoError::EncodeError(format!("JPEG height {} too large", pix.height())))?;

    let (color_type, data) = match pix.depth() {
        PixelDepth::Bit8 => (
            jpeg_encoder::ColorType::Luma,
            pix.data().iter().map(|&v| v as u8).collect::<Vec<u8>>(),
        ),
        PixelDepth::Bit32 => {
            let mut data = Vec::with_capacity(pix.data().len() * 3);
            for &word in pix.data() {
                let (r, g, b) = color::extract_rgb(word);
                data.extend_from_slice(&[r, g, b]);
            }
            (jpeg_encoder::ColorType::Rgb, data)
        }
    };

    let encoder = jpeg_encoder::Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(&data, width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    Ok(())
}
