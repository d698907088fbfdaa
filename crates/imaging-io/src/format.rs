//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::IoResult;
use imaging_core::ImageFormat;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PNG: 89 50 4E 47 0D 0A 1A 0A
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header)?;
    Ok(detect_format_from_bytes(&header[..bytes_read]))
}

/// Detect image format from the leading bytes of a file
pub fn detect_format_from_bytes(data: &[u8]) -> ImageFormat {
    if data.starts_with(PNG_MAGIC) {
        ImageFormat::Png
    } else {
        ImageFormat::Unknown
    }
}
