//! Image format detection
//!
//! Input files are recognized by their leading bytes; output files by
//! their extension.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Not recognized, or "decide from the path" when writing
    #[default]
    Unknown,
    /// JFIF JPEG
    Jpeg,
    /// PNG
    Png,
    /// Binary PGM (`P5`)
    Pnm,
}

/// Leading bytes of each recognized format.
const SIGNATURES: [(&[u8], ImageFormat); 3] = [
    (b"\x89PNG\r\n\x1a\n", ImageFormat::Png),
    (b"\xFF\xD8\xFF", ImageFormat::Jpeg),
    (b"P5", ImageFormat::Pnm),
];

/// Longest signature in [`SIGNATURES`].
const HEADER_LEN: usize = 8;

impl ImageFormat {
    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Pnm => "pgm",
        }
    }

    /// Guess the format from a path's extension, ignoring case.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return Self::Unknown;
        };
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "jfif" => Self::Jpeg,
            "png" => Self::Png,
            "pgm" | "pnm" => Self::Pnm,
            _ => Self::Unknown,
        }
    }
}

/// Detect the format of a file from its first bytes.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    File::open(path)?
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the format of an in-memory image from its first bytes.
///
/// # Errors
///
/// - [`IoError::InvalidData`] if fewer than two bytes are given
/// - [`IoError::UnsupportedFormat`] if no signature matches
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(format!(
            "{} bytes are too few to identify an image",
            data.len()
        )));
    }
    SIGNATURES
        .iter()
        .find(|(sig, _)| data.starts_with(sig))
        .map(|&(_, format)| format)
        .ok_or_else(|| IoError::UnsupportedFormat("unrecognized image signature".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_pgm() {
        assert_eq!(
            detect_format_from_bytes(b"P5\n100 100\n255\n").unwrap(),
            ImageFormat::Pnm
        );
    }

    #[test]
    fn test_detect_unknown() {
        // color PPM is not accepted
        assert!(matches!(
            detect_format_from_bytes(b"P6\n1 1\n255\n"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"X"),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(ImageFormat::from_path("img/1_new.jpg"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_path("a/b.PNG"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path("out.pgm"), ImageFormat::Pnm);
        assert_eq!(ImageFormat::from_path("noext"), ImageFormat::Unknown);
    }
}
