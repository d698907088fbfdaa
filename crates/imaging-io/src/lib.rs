//! imaging-io - Image I/O for the imaging library
//!
//! PNG reading and writing of ARGB [`Image`]s through the `png` crate,
//! plus format detection by magic number. The regression framework uses
//! it to dump results for inspection.

mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use imaging_core::ImageFormat;
pub use crate::png::{read_png, write_png};

use imaging_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path, detecting the format
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    match detect_format(path)? {
        ImageFormat::Png => read_png(BufReader::new(File::open(path)?)),
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(format!(
            "unrecognized image file: {}",
            path.display()
        ))),
    }
}

/// Read an image from memory, detecting the format
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    match detect_format_from_bytes(data) {
        ImageFormat::Png => read_png(Cursor::new(data)),
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(
            "unrecognized image data".to_string(),
        )),
    }
}

/// Write an image to a file path in the given format
pub fn write_image<P: AsRef<Path>>(img: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_to(img, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory in the given format
pub fn write_image_mem(img: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(img, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_to<W: Write>(img: &Image, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        ImageFormat::Png => write_png(img, writer),
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(
            "no encoder for unknown format".to_string(),
        )),
    }
}
