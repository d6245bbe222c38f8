//! despeckle-io - Grayscale image I/O
//!
//! Decodes files into 8-bit [`ImageBuffer`]s and encodes them back. Color
//! inputs are reduced to luminance on decode; the pipeline itself never
//! sees color.
//!
//! Supported formats (each behind a cargo feature, all on by default):
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | JPEG | yes | yes (quality 95) | `jpeg` |
//! | PNG | yes | yes | `png-format` |
//! | PGM (`P5`) | yes | yes | `pnm` |

mod error;
mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use despeckle_core::ImageBuffer;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Quality used when encoding JPEG output.
pub const JPEG_QUALITY: u8 = 95;

/// Read an image file as 8-bit grayscale.
///
/// The format is detected from the file contents, not the extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let img = read_image_mem(&data)?;
    log::debug!(
        "read {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Decode an in-memory image as 8-bit grayscale.
pub fn read_image_mem(data: &[u8]) -> IoResult<ImageBuffer> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pgm(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} reading not enabled",
            other
        ))),
    }
}

/// Write an image to a file in the given format.
///
/// [`ImageFormat::Unknown`] picks the format from the path's extension.
pub fn write_image<P: AsRef<Path>>(img: &ImageBuffer, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let format = match format {
        ImageFormat::Unknown => ImageFormat::from_path(path),
        f => f,
    };
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_to(img, &mut writer, format)?;
    writer.flush()?;
    log::debug!("wrote {} as {:?}", path.display(), format);
    Ok(())
}

/// Encode an image into memory.
pub fn write_image_mem(img: &ImageBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_image_to(img, &mut buf, format)?;
    Ok(buf)
}

fn write_image_to<W: Write>(img: &ImageBuffer, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(img, writer, JPEG_QUALITY),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(img, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pgm(img, writer),
        other => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "{:?} writing not enabled",
                other
            )))
        }
    }
}

/// BT.601 luma of an RGB triple, in 14-bit fixed point with rounding.
#[inline]
pub(crate) fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + 8192) >> 14) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(90, 90, 90), 90);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let img = ImageBuffer::new(2, 2).unwrap();
        assert!(matches!(
            write_image_mem(&img, ImageFormat::Unknown),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
