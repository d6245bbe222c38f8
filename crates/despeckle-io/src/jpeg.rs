//! JPEG image format support
//!
//! Reads with `jpeg-decoder`, writes with `jpeg-encoder`. RGB input is
//! reduced to luminance; CMYK input is rejected.

use crate::{IoError, IoResult, luma};
use despeckle_core::ImageBuffer;
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::{Read, Write};

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<ImageBuffer> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let npix = width as usize * height as usize;

    let gray = match info.pixel_format {
        PixelFormat::L8 => pixels,
        // 16-bit samples arrive big-endian; keep the high byte
        PixelFormat::L16 => pixels.chunks_exact(2).map(|c| c[0]).collect(),
        PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .map(|c| luma(c[0], c[1], c[2]))
            .collect(),
        PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat(
                "CMYK JPEG is not supported".to_string(),
            ));
        }
    };

    if gray.len() != npix {
        return Err(IoError::InvalidData(format!(
            "JPEG produced {} samples for {}x{}",
            gray.len(),
            width,
            height
        )));
    }

    Ok(ImageBuffer::from_raw(width, height, gray)?)
}

/// Write an 8-bit grayscale JPEG.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if either dimension exceeds 65535 or
/// the encoder fails.
pub fn write_jpeg<W: Write>(img: &ImageBuffer, writer: W, quality: u8) -> IoResult<()> {
    let width = u16::try_from(img.width())
        .map_err(|_| IoError::EncodeError(format!("JPEG width {} too large", img.width())))?;
    let height = u16::try_from(img.height())
        .map_err(|_| IoError::EncodeError(format!("JPEG height {} too large", img.height())))?;

    let encoder = jpeg_encoder::Encoder::new(writer, quality);
    encoder
        .encode(img.data(), width, height, jpeg_encoder::ColorType::Luma)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;
    Ok(())
}
