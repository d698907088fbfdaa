//! Imaging Core - Basic data structures for image processing
//!
//! This crate provides the fundamental data structures used throughout
//! the imaging library:
//!
//! - [`Image`] / [`ImageMut`] - The ARGB image container (immutable / mutable)
//! - [`Border`] - Edge widths kept undistorted by nine-slice scaling
//! - [`Region`] - Rectangles used for cropping and placement
//! - [`color`] - Channel extraction and packing for 32-bit ARGB pixels

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{Border, Image, ImageFormat, ImageMut, MAX_DIMENSION, Region};

/// Channel helpers for 32-bit ARGB pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB).
/// Every function here is a byte-lane operation; the scaler's fixed-point
/// arithmetic depends on these exact shifts.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Alpha mask of an opaque pixel.
    pub const OPAQUE: u32 = 0xff << ALPHA_SHIFT;

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Split a pixel into `[a, r, g, b]` lanes widened for accumulation.
    #[inline]
    pub fn lanes(pixel: u32) -> [i32; 4] {
        [
            ((pixel >> ALPHA_SHIFT) & 0xff) as i32,
            ((pixel >> RED_SHIFT) & 0xff) as i32,
            ((pixel >> GREEN_SHIFT) & 0xff) as i32,
            ((pixel >> BLUE_SHIFT) & 0xff) as i32,
        ]
    }

    /// Pack `[a, r, g, b]` lanes into a pixel.
    ///
    /// Lanes are shifted and or-ed without masking, so a lane above 255
    /// spills into its neighbour exactly like the packing macro it
    /// replaces.
    #[inline]
    pub fn pack_lanes(lanes: [i32; 4]) -> u32 {
        ((lanes[0] as u32) << ALPHA_SHIFT)
            | ((lanes[1] as u32) << RED_SHIFT)
            | ((lanes[2] as u32) << GREEN_SHIFT)
            | ((lanes[3] as u32) << BLUE_SHIFT)
    }

    /// Compose a 32-bit ARGB pixel.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Compose an opaque 32-bit pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_argb(255, r, g, b)
    }

    /// Extract `(a, r, g, b)` from a 32-bit pixel.
    #[inline]
    pub fn extract_argb(pixel: u32) -> (u8, u8, u8, u8) {
        (alpha(pixel), red(pixel), green(pixel), blue(pixel))
    }

    /// Extract `(r, g, b)` from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

}
