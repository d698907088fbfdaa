//! imaging-test - Regression test framework for the imaging library
//!
//! Regression tests pin image operations by the CRC32 of their output
//! pixels. The framework supports three modes:
//!
//! - **Generate**: Print the checksums of the current outputs
//! - **Compare**: Compare checksums and images with the expected values
//! - **Display**: Compare, and also write every checked image as PNG to
//!   `tests/regout` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use imaging_test::{RegParams, xorshift_image};
//!
//! let mut rp = RegParams::new("scale");
//! let img = xorshift_image(64, 64, false, 0x2545F491).unwrap();
//! rp.compare_checksum(1119475312, &img);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use imaging_core::{Image, color};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // imaging-test is at crates/imaging-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a `width` x `height` image of xorshift32 noise.
///
/// The generator state starts at `seed` and is stepped once per pixel in
/// row-major order (`s ^= s << 13; s ^= s >> 17; s ^= s << 5`); the state
/// is the pixel. Without alpha the alpha byte is forced to `0xff`.
pub fn xorshift_image(width: u32, height: u32, has_alpha: bool, seed: u32) -> TestResult<Image> {
    let mut state = seed;
    let data = (0..width as usize * height as usize)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            if has_alpha { state } else { state | color::OPAQUE }
        })
        .collect();
    Ok(Image::from_data(width, height, has_alpha, data)?)
}

/// Build a smooth gradient: red grows along X, green along Y, blue along
/// the diagonal. With alpha, opacity fades from 255 to 128 along X.
pub fn gradient_image(width: u32, height: u32, has_alpha: bool) -> TestResult<Image> {
    let xs = width.saturating_sub(1).max(1);
    let ys = height.saturating_sub(1).max(1);
    let ds = (width + height).saturating_sub(2).max(1);
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / xs) as u8;
            let g = (y * 255 / ys) as u8;
            let b = ((x + y) * 255 / ds) as u8;
            let a = if has_alpha { 255 - r / 2 } else { 255 };
            data.push(color::compose_argb(a, r, g, b));
        }
    }
    Ok(Image::from_data(width, height, has_alpha, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xorshift_sequence() {
        let img = xorshift_image(2, 1, true, 1).unwrap();
        // xorshift32 from state 1
        assert_eq!(img.data(), &[270369, 67634689]);
        let opaque = xorshift_image(2, 1, false, 1).unwrap();
        assert_eq!(opaque.data()[0], 0xff000000 | 270369);
        assert!(!opaque.has_alpha());
    }

    #[test]
    fn test_gradient_corners() {
        let img = gradient_image(5, 3, true).unwrap();
        assert_eq!(img.get_argb(0, 0), Some((255, 0, 0, 0)));
        assert_eq!(img.get_argb(4, 2), Some((128, 255, 255, 255)));
        let one = gradient_image(1, 1, false).unwrap();
        assert_eq!(one.get_pixel(0, 0), Some(0xff000000));
    }
}
