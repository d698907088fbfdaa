//! Rectangular regions
//!
//! A `Region` names a rectangle in pixel coordinates. It is used to crop
//! the source of a scale and to place the result inside a larger image.
//! Coordinates may be negative; [`Region::clip_to`] intersects with an
//! image of a given size.

/// Rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Region {
    /// Create a region.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Region { x, y, w, h }
    }

    /// Region covering a whole `width` x `height` image.
    pub const fn full(width: u32, height: u32) -> Self {
        Region {
            x: 0,
            y: 0,
            w: width as i32,
            h: height as i32,
        }
    }

    /// True if the region has no area.
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Whether the region lies entirely inside a `width` x `height` image.
    pub fn fits_in(&self, width: u32, height: u32) -> bool {
        !self.is_empty()
            && self.x >= 0
            && self.y >= 0
            && self.right() <= width as i32
            && self.bottom() <= height as i32
    }

    /// Intersect with a `width` x `height` image.
    ///
    /// Returns `None` if nothing of the region is inside the image.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Region> {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.right().min(width as i32);
        let y1 = self.bottom().min(height as i32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Region::new(x0, y0, x1 - x0, y1 - y0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_inside() {
        let r = Region::new(1, 2, 3, 4);
        assert_eq!(r.clip_to(10, 10), Some(r));
        assert!(r.fits_in(4, 6));
        assert!(!r.fits_in(3, 6));
    }

    #[test]
    fn test_clip_negative_origin() {
        let r = Region::new(-2, -1, 5, 5);
        assert_eq!(r.clip_to(10, 10), Some(Region::new(0, 0, 3, 4)));
        assert!(!r.fits_in(10, 10));
    }

    #[test]
    fn test_clip_outside() {
        assert_eq!(Region::new(10, 0, 5, 5).clip_to(10, 10), None);
        assert_eq!(Region::new(0, 0, 0, 5).clip_to(10, 10), None);
        assert!(Region::new(0, 0, -1, 5).is_empty());
    }

    #[test]
    fn test_full() {
        let r = Region::full(7, 3);
        assert_eq!((r.right(), r.bottom()), (7, 3));
    }
}
