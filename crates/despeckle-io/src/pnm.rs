//! PNM (Portable Any Map) format support
//!
//! Reads and writes PGM (P5 binary) and PPM (P6 binary) with a maxval of
//! 255. Header comments (`#` to end of line) are skipped. ASCII variants
//! and 16-bit samples are not supported.

use crate::{IoError, IoResult, raster_len};
use despeckle_core::{ImageFormat, Pix, PixelDepth, color};
use std::io::{BufRead, Write};

/// Read a PNM image (P5/P6) from a reader.
///
/// # Returns
/// A `Pix` at 8 bpp (PGM) or 32 bpp RGB (PPM).
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut header = HeaderReader { data: &data, pos: 0 };
    let magic = header.token()?;
    let samples = match magic.as_str() {
        "P5" => 1usize,
        "P6" => 3usize,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM type: {}",
                other
            )));
        }
    };
    let width = header.number()?;
    let height = header.number()?;
    let maxval = header.number()?;
    if maxval != 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {} not supported",
            maxval
        )));
    }
    // Exactly one whitespace byte separates the header from the raster
    let raster = data.get(header.pos + 1..).unwrap_or_default();

    let expected = raster_len(width, height, samples)?;
    if raster.len() < expected {
        return Err(IoError::InvalidData(format!(
            "PNM raster too short: {} < {}",
            raster.len(),
            expected
        )));
    }

    let depth = if samples == 1 {
        PixelDepth::Bit8
    } else {
        PixelDepth::Bit32
    };
    let mut pix_mut = Pix::new(width, height, depth)?.to_mut();
    pix_mut.set_informat(ImageFormat::Pnm);

    for (i, px) in raster[..expected].chunks_exact(samples).enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        let val = if samples == 1 {
            px[0] as u32
        } else {
            color::compose_rgb(px[0], px[1], px[2])
        };
        pix_mut.set_pixel_unchecked(x, y, val);
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as binary PNM to a writer.
///
/// Chooses P5 (8 bpp grayscale) or P6 (32 bpp, alpha dropped).
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    let (magic, samples) = match pix.depth() {
        PixelDepth::Bit8 => ("P5", 1),
        PixelDepth::Bit32 => ("P6", 3),
    };
    write!(writer, "{}\n{} {}\n255\n", magic, pix.width(), pix.height())?;

    let mut raster = Vec::with_capacity(pix.data().len() * samples);
    for &word in pix.data() {
        if samples == 1 {
            raster.push(word as u8);
        } else {
            let (r, g, b) = color::extract_rgb(word);
            raster.extend_from_slice(&[r, g, b]);
        }
    }
    writer.write_all(&raster)?;
    Ok(())
}

/// Whitespace-separated header tokens with `#` comments.
struct HeaderReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl HeaderReader<'_> {
    fn skip_space_and_comments(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    if c == b'\n' {
                        break;
                    }
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> IoResult<String> {
        self.skip_space_and_comments();
        let start = self.pos;
        while let Some(&b) = self.data.get(self.pos) {
            if b.is_ascii_whitespace() || b == b'#' {
                break;
            }
            self.pos += 1;
        }
        if start == self.pos || self.pos >= self.data.len() {
            return Err(IoError::InvalidData("truncated PNM header".to_string()));
        }
        Ok(String::from_utf8_lossy(&self.data[start..self.pos]).into_owned())
    }

    fn number(&mut self) -> IoResult<u32> {
        let tok = self.token()?;
        tok.parse()
            .map_err(|_| IoError::InvalidData(format!("bad PNM header field: {:?}", tok)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pnm_roundtrip_ppm() {
        let mut pix_mut = Pix::new(3, 2, PixelDepth::Bit32).unwrap().to_mut();
        pix_mut.set_rgb(0, 0, 1, 2, 3).unwrap();
        pix_mut.set_rgb(2, 1, 250, 251, 252).unwrap();
        let pix: Pix = pix_mut.into();

        let mut buffer = Vec::new();
        write_pnm(&pix, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P6\n3 2\n255\n"));

        let pix2 = read_pnm(Cursor::new(buffer)).unwrap();
        assert_eq!(pix2.depth(), PixelDepth::Bit32);
        assert_eq!(pix2.get_rgb(0, 0), Some((1, 2, 3)));
        assert_eq!(pix2.get_rgb(2, 1), Some((250, 251, 252)));
        assert_eq!(pix2.informat(), ImageFormat::Pnm);
    }

    #[test]
    fn test_pnm_read_with_comments() {
        let mut data = b"P5\n# made by hand\n2 # width\n2\n255\n".to_vec();
        data.extend_from_slice(&[0, 64, 128, 255]);
        let pix = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit8);
        assert_eq!(pix.get_pixel(1, 0), Some(64));
        assert_eq!(pix.get_pixel(1, 1), Some(255));
    }

    #[test]
    fn test_pnm_errors() {
        assert!(matches!(
            read_pnm(Cursor::new(b"P2\n1 1\n255\n0".to_vec())),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            read_pnm(Cursor::new(b"P5\n1 1\n65535\n\0\0".to_vec())),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            read_pnm(Cursor::new(b"P6\n4 4\n255\n\0\0\0".to_vec())),
            Err(IoError::InvalidData(_))
        ));
        assert!(read_pnm(Cursor::new(b"P5\n1".to_vec())).is_err());
    }

    #[test]
    fn test_pnm_huge_header_rejected() {
        let data = b"P6\n4294967295 4294967295\n255\n\0\0\0".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
        // Product fits but the raster is absent
        let data = b"P5\n65536 65536\n255\n\0".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
    }
}
