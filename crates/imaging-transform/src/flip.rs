//! Mirror operations
//!
//! Flips are scales to the same size with a negative extent on the
//! mirrored axis. Sampling at 1:1 copies every pixel verbatim, so the
//! result is exact. The image border is mirrored with the pixels.

use crate::TransformResult;
use crate::scale::{ScaleOptions, scale};
use imaging_core::{Border, Image, ImageMut};

fn mirrored(img: &Image, flip_x: bool, flip_y: bool) -> TransformResult<Image> {
    let w = img.width() as i32;
    let h = img.height() as i32;
    let dw = if flip_x { -w } else { w };
    let dh = if flip_y { -h } else { h };
    let out = scale(img, dw, dh, &ScaleOptions::sampling())?;

    let b = img.border();
    let (left, right) = if flip_x { (b.right, b.left) } else { (b.left, b.right) };
    let (top, bottom) = if flip_y { (b.bottom, b.top) } else { (b.top, b.bottom) };
    let mut out: ImageMut = out.into_mut();
    out.set_border(Border::new(left, right, top, bottom));
    out.set_format(img.format());
    Ok(out.into())
}

/// Flip an image left-right (horizontal mirror)
pub fn flip_horizontal(img: &Image) -> TransformResult<Image> {
    mirrored(img, true, false)
}

/// Flip an image top-bottom (vertical mirror)
pub fn flip_vertical(img: &Image) -> TransformResult<Image> {
    mirrored(img, false, true)
}

/// Rotate an image 180 degrees
pub fn rotate_180(img: &Image) -> TransformResult<Image> {
    mirrored(img, true, true)
}
