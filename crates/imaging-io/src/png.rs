//! PNG image format support
//!
//! Every PNG is decoded to 8-bit ARGB: palettes and low bit depths are
//! expanded, 16-bit samples keep their high byte and gray is replicated
//! into R, G and B. Images with an alpha channel (or a transparency
//! chunk) come back with `has_alpha` set; all others are opaque.

use crate::{IoError, IoResult};
use imaging_core::{Image, ImageFormat, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?}",
            color_type, bit_depth
        )));
    }
    let (samples, has_alpha) = match color_type {
        ColorType::Grayscale => (1, false),
        ColorType::GrayscaleAlpha => (2, true),
        ColorType::Rgb => (3, false),
        ColorType::Rgba => (4, true),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for row in data.chunks(bytes_per_row).take(height as usize) {
        for px in row.chunks_exact(samples).take(width as usize) {
            let pixel = match *px {
                [g] => color::compose_rgb(g, g, g),
                [g, a] => color::compose_argb(a, g, g, g),
                [r, g, b] => color::compose_rgb(r, g, b),
                [r, g, b, a] => color::compose_argb(a, r, g, b),
                _ => unreachable!(),
            };
            pixels.push(pixel);
        }
    }

    let mut img = Image::from_data(width, height, has_alpha, pixels)?.into_mut();
    img.set_format(ImageFormat::Png);
    Ok(img.into())
}

/// Write a PNG image
///
/// Images with `has_alpha` are written as RGBA, all others as RGB.
pub fn write_png<W: Write>(img: &Image, writer: W) -> IoResult<()> {
    let width = img.width();
    let height = img.height();
    let (color_type, samples) = if img.has_alpha() {
        (ColorType::Rgba, 4)
    } else {
        (ColorType::Rgb, 3)
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(img.data().len() * samples);
    for &pixel in img.data() {
        let (a, r, g, b) = color::extract_argb(pixel);
        data.extend_from_slice(&[r, g, b]);
        if samples == 4 {
            data.push(a);
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
