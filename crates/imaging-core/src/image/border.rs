//! Scaling borders
//!
//! A `Border` marks fixed-width bands at the image edges. When the image
//! is scaled, those bands are mapped 1:1 where the destination has room
//! and only the interior is stretched (nine-slice scaling). This keeps
//! bevels and frames of UI graphics free of edge artifacts.

use super::{Image, ImageMut};

/// Edge widths, in source pixels, preserved by scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Border {
    /// Left band width
    pub left: u32,
    /// Right band width
    pub right: u32,
    /// Top band height
    pub top: u32,
    /// Bottom band height
    pub bottom: u32,
}

impl Border {
    /// Create a border with different sizes per side.
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Border {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Create a border with the same size on all sides.
    pub const fn uniform(npix: u32) -> Self {
        Border::new(npix, npix, npix, npix)
    }

    /// True if no edge is preserved (ordinary uniform scaling).
    pub fn is_zero(&self) -> bool {
        self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
    }

    /// Horizontal `(lo, hi)` pair.
    pub fn horizontal(&self) -> (u32, u32) {
        (self.left, self.right)
    }

    /// Vertical `(lo, hi)` pair.
    pub fn vertical(&self) -> (u32, u32) {
        (self.top, self.bottom)
    }
}

impl Image {
    /// Create a copy of this image carrying a different border.
    ///
    /// The pixel data is copied; `self` is left unchanged.
    pub fn with_border(&self, border: Border) -> Image {
        let mut m: ImageMut = self.to_mut();
        m.set_border(border);
        m.into()
    }
}
