//! PGM (binary `P5`) format support
//!
//! Header tokens may be separated by any whitespace and interleaved with
//! `#` comments. `maxval` up to 255 is rescaled to 0..=255; 16-bit files
//! (`maxval > 255`) keep the high byte of each big-endian sample.

use crate::{IoError, IoResult};
use despeckle_core::ImageBuffer;
use std::io::{BufRead, Read, Write};

/// Read a binary PGM image from a reader.
pub fn read_pgm<R: BufRead>(mut reader: R) -> IoResult<ImageBuffer> {
    let magic = next_token(&mut reader)?;
    if magic != "P5" {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM variant {} (only P5 is supported)",
            magic
        )));
    }
    let width = parse_header_value(&mut reader, "width")?;
    let height = parse_header_value(&mut reader, "height")?;
    let maxval = parse_header_value(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("PGM maxval {} out of range", maxval)));
    }

    let bytes_per_sample: u64 = if maxval > 255 { 2 } else { 1 };
    let len = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|n| n.checked_mul(bytes_per_sample))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PGM size {}x{} overflows", width, height))
        })?;
    let mut raw = Vec::new();
    let got = reader.take(len).read_to_end(&mut raw)? as u64;
    if got != len {
        return Err(IoError::InvalidData(format!(
            "PGM {}x{} needs {} sample bytes, found {}",
            width, height, len, got
        )));
    }

    let data: Vec<u8> = if bytes_per_sample == 2 {
        raw.chunks_exact(2).map(|c| c[0]).collect()
    } else if maxval == 255 {
        raw
    } else {
        raw.iter()
            .map(|&v| ((v as u32).min(maxval) * 255 / maxval) as u8)
            .collect()
    };

    Ok(ImageBuffer::from_raw(width, height, data)?)
}

/// Write an image as binary PGM (`P5`, maxval 255).
pub fn write_pgm<W: Write>(img: &ImageBuffer, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", img.width(), img.height())?;
    writer.write_all(img.data())?;
    Ok(())
}

fn parse_header_value<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = next_token(reader)?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidData(format!("bad PGM {}: {:?}", what, token)))
}

/// Read one whitespace-delimited header token, skipping `#` comments.
///
/// Consumes exactly one whitespace byte after the token, so after the
/// maxval token the reader sits on the first sample.
fn next_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("truncated PGM header".to_string()));
            }
            return Ok(token);
        }
        let c = byte[0];
        if c == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
            continue;
        }
        if c.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            return Ok(token);
        }
        token.push(c as char);
    }
}
