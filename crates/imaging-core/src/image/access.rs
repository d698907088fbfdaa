//! Pixel access functions
//!
//! Getters and setters for individual ARGB pixels. Bounds-checked
//! variants return `Option` / `Result`; the `_unchecked` variants panic on
//! out-of-range coordinates through slice indexing.

use super::{Image, ImageMut};
use crate::color;
use crate::error::{Error, Result};

impl Image {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking on `x`.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Get `(a, r, g, b)` at (x, y).
    pub fn get_argb(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_argb)
    }
}

impl ImageMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.data()[y as usize * self.width() as usize + x as usize])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking on `x`.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the pixel buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = y as usize * self.width() as usize + x as usize;
        self.data_mut()[idx] = val;
    }

    /// Set an ARGB pixel at (x, y).
    pub fn set_argb(&mut self, x: u32, y: u32, a: u8, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_argb(a, r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel() {
        let mut m = Image::new(3, 2).unwrap().to_mut();
        m.set_pixel(2, 1, 0xdeadbeef).unwrap();
        assert_eq!(m.get_pixel(2, 1), Some(0xdeadbeef));
        let img: Image = m.into();
        assert_eq!(img.get_pixel(2, 1), Some(0xdeadbeef));
        assert_eq!(img.get_pixel(3, 1), None);
        assert_eq!(img.get_pixel(0, 2), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut m = Image::new(3, 2).unwrap().to_mut();
        assert!(matches!(
            m.set_pixel(3, 0, 1),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert!(m.set_pixel(0, 2, 1).is_err());
    }

    #[test]
    fn test_argb_access() {
        let mut m = Image::new(1, 1).unwrap().to_mut();
        m.set_argb(0, 0, 10, 20, 30, 40).unwrap();
        let img: Image = m.into();
        assert_eq!(img.get_argb(0, 0), Some((10, 20, 30, 40)));
    }
}
