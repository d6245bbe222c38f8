//! PNG image format support
//!
//! Every PNG color type is decoded to 8-bit luminance: low bit depths are
//! stretched to 0..=255, 16-bit samples keep their high byte, alpha is
//! dropped, palettes are resolved before conversion.

use crate::{IoError, IoResult, luma};
use despeckle_core::ImageBuffer;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<ImageBuffer> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let palette: Option<Vec<u8>> = info.palette.as_ref().map(|p| p.to_vec());

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    // Decoder transformations may already have expanded the stored layout.
    let color_type = output_info.color_type;
    let bit_depth = output_info.bit_depth;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut img = ImageBuffer::new(width, height)?;

    match color_type {
        ColorType::Grayscale => {
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    img.put(x, y, sample_at(row, x, bit_depth, 1, 0));
                }
            }
        }
        ColorType::GrayscaleAlpha => {
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    img.put(x, y, sample_at(row, x, bit_depth, 2, 0));
                }
            }
        }
        ColorType::Rgb | ColorType::Rgba => {
            let channels = if color_type == ColorType::Rgb { 3 } else { 4 };
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let r = sample_at(row, x, bit_depth, channels, 0);
                    let g = sample_at(row, x, bit_depth, channels, 1);
                    let b = sample_at(row, x, bit_depth, channels, 2);
                    img.put(x, y, luma(r, g, b));
                }
            }
        }
        ColorType::Indexed => {
            let palette = palette.ok_or_else(|| {
                IoError::InvalidData("indexed PNG without palette".to_string())
            })?;
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let index = raw_index(row, x, bit_depth) as usize;
                    let rgb = palette.get(index * 3..index * 3 + 3).ok_or_else(|| {
                        IoError::InvalidData(format!("palette index {} out of range", index))
                    })?;
                    img.put(x, y, luma(rgb[0], rgb[1], rgb[2]));
                }
            }
        }
    }

    Ok(img)
}

/// Raw (unscaled) value of pixel `x` in a packed row of 1/2/4/8-bit samples.
fn raw_index(row: &[u8], x: u32, bit_depth: BitDepth) -> u8 {
    match bit_depth {
        BitDepth::One => (row[(x / 8) as usize] >> (7 - (x % 8))) & 1,
        BitDepth::Two => (row[(x / 4) as usize] >> (6 - (x % 4) * 2)) & 3,
        BitDepth::Four => (row[(x / 2) as usize] >> (4 - (x % 2) * 4)) & 0xF,
        BitDepth::Eight | BitDepth::Sixteen => row[x as usize],
    }
}

/// Channel `channel` of pixel `x`, scaled to 8 bits.
fn sample_at(row: &[u8], x: u32, bit_depth: BitDepth, channels: usize, channel: usize) -> u8 {
    match bit_depth {
        BitDepth::One => raw_index(row, x, bit_depth) * 255,
        BitDepth::Two => raw_index(row, x, bit_depth) * 85,
        BitDepth::Four => raw_index(row, x, bit_depth) * 17,
        BitDepth::Eight => row[x as usize * channels + channel],
        // big-endian, keep the high byte
        BitDepth::Sixteen => row[(x as usize * channels + channel) * 2],
    }
}

/// Write an 8-bit grayscale PNG
pub fn write_png<W: Write>(img: &ImageBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, img.width(), img.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(img.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
