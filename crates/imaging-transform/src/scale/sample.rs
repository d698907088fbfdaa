//! Nearest-neighbour resampling

use super::coverage::ScaleInfo;

/// Where a resampler writes and which window of the tables it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DestRegion {
    /// First column of the X tables to read
    pub table_x: usize,
    /// First row of the Y tables to read
    pub table_y: usize,
    /// Left edge in the destination buffer
    pub x: usize,
    /// Top edge in the destination buffer
    pub y: usize,
    /// Width to write
    pub width: usize,
    /// Height to write
    pub height: usize,
    /// Destination row stride in pixels
    pub stride: usize,
}

impl DestRegion {
    /// Fill a whole `width` x `height` buffer from the start of the tables.
    pub fn full(width: usize, height: usize) -> Self {
        DestRegion {
            width,
            height,
            stride: width,
            ..Default::default()
        }
    }

    /// Start of destination row `y` of the region.
    #[inline]
    pub(crate) fn row_start(&self, y: usize) -> usize {
        (self.y + y) * self.stride + self.x
    }

    pub(crate) fn debug_check(&self, info: &ScaleInfo, src: &[u32], dest: &[u32]) {
        debug_assert_eq!(
            src.len(),
            info.source_width() as usize * info.source_height() as usize
        );
        debug_assert!(self.table_x + self.width <= info.xpoints().len());
        debug_assert!(self.table_y + self.height <= info.ypoints().len());
        debug_assert!(self.x + self.width <= self.stride);
        debug_assert!(self.height == 0 || self.row_start(self.height - 1) + self.width <= dest.len());
    }
}

/// Copy the nearest source pixel into every pixel of `region`.
///
/// Pixels are copied verbatim, alpha included.
///
/// # Panics
///
/// Panics if `region` reaches outside `dest` or outside the tables of
/// `info`.
pub fn scale_sample(info: &ScaleInfo, src: &[u32], dest: &mut [u32], region: &DestRegion) {
    region.debug_check(info, src, dest);
    let xpoints = &info.xpoints()[region.table_x..region.table_x + region.width];
    let ypoints = &info.ypoints()[region.table_y..region.table_y + region.height];

    for (y, &row) in ypoints.iter().enumerate() {
        let start = region.row_start(y);
        let out = &mut dest[start..start + region.width];
        for (d, &col) in out.iter_mut().zip(xpoints) {
            *d = src[row + col];
        }
    }
}
