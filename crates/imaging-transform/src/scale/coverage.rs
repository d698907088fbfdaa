//! Coverage tables
//!
//! For every destination column (row) the scaler needs the source column
//! (row) it starts reading at and, when anti-aliasing, how much of each
//! source pixel falls under it. Those per-axis tables are computed once
//! per scale call and stored in a [`ScaleInfo`].
//!
//! # Fixed-point formats
//!
//! - Source positions advance in Q16 (`1 << 16` is one source pixel).
//! - On a magnifying axis the weight is the Q8 fraction of the distance
//!   to the next source pixel.
//! - On a minifying axis the weight is a [`MinifyWeight`]: the Q14
//!   coverage of the first source pixel and the Q14 coverage contributed
//!   by every following whole pixel. The coverages of one destination
//!   pixel always sum to [`FULL_COVERAGE`].
//!
//! # Borders
//!
//! The `lo`/`hi` border bands are mapped 1:1 and only the interior is
//! stretched. If the destination is too small to hold both bands they
//! are shrunk proportionally.

use imaging_core::image::try_alloc;
use imaging_core::{Border, Error, Result};

/// Q14 coverage of one whole destination pixel
pub const FULL_COVERAGE: i32 = 1 << 14;

/// Coverage of one destination pixel on a minifying axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyWeight {
    /// Q14 coverage of the first contributing source pixel
    pub leading_weight: u16,
    /// Q14 coverage of each following whole source pixel
    pub run_length: u16,
}

impl MinifyWeight {
    /// Weight of a border pixel: one source pixel, fully covered.
    pub const WHOLE: MinifyWeight = MinifyWeight {
        leading_weight: FULL_COVERAGE as u16,
        run_length: FULL_COVERAGE as u16,
    };

    /// Iterate over the Q14 coverages of consecutive source pixels.
    ///
    /// Yields the leading weight, then `run_length` while more than that
    /// remains, then the remainder. The items sum to [`FULL_COVERAGE`].
    pub fn run(self) -> CoverageRun {
        CoverageRun {
            leading: Some(i32::from(self.leading_weight)),
            remaining: FULL_COVERAGE - i32::from(self.leading_weight),
            step: i32::from(self.run_length),
        }
    }
}

/// Iterator over the coverages of one destination pixel
#[derive(Debug, Clone)]
pub struct CoverageRun {
    leading: Option<i32>,
    remaining: i32,
    step: i32,
}

impl Iterator for CoverageRun {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        if let Some(lead) = self.leading.take() {
            return Some(lead);
        }
        if self.remaining > self.step {
            self.remaining -= self.step;
            Some(self.step)
        } else if self.remaining > 0 {
            let last = self.remaining;
            self.remaining = 0;
            Some(last)
        } else {
            None
        }
    }
}

/// Anti-aliasing weights of one axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisWeights {
    /// Q8 offset towards the next source pixel
    Magnify(Vec<u8>),
    /// Box coverage per destination pixel
    Minify(Vec<MinifyWeight>),
}

impl AxisWeights {
    /// Number of destination pixels covered.
    pub fn len(&self) -> usize {
        match self {
            AxisWeights::Magnify(w) => w.len(),
            AxisWeights::Minify(w) => w.len(),
        }
    }

    /// True if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which inner loop the area-averaging resampler runs
///
/// The discriminant is the 2-bit axis mode: bit 0 is set when X
/// magnifies, bit 1 when Y magnifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Both axes minify: 2-D box sum
    DownDown = 0,
    /// X magnifies, Y minifies: vertical box sum and horizontal blend
    DownVertical = 1,
    /// X minifies, Y magnifies: horizontal box sum and vertical blend
    DownHorizontal = 2,
    /// Both axes magnify: bilinear blend
    UpUp = 3,
}

impl ScaleMode {
    /// Classify a `src_w` x `src_h` -> `|dw|` x `|dh|` scale.
    ///
    /// An axis magnifies when the destination is at least as large as
    /// the source, so 1:1 counts as magnifying.
    pub fn classify(src_w: u32, src_h: u32, dw: i32, dh: i32) -> Self {
        let x_up = dw.unsigned_abs() >= src_w;
        let y_up = dh.unsigned_abs() >= src_h;
        match (x_up, y_up) {
            (false, false) => ScaleMode::DownDown,
            (true, false) => ScaleMode::DownVertical,
            (false, true) => ScaleMode::DownHorizontal,
            (true, true) => ScaleMode::UpUp,
        }
    }

    /// The 2-bit axis mode.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Whether the X axis magnifies.
    pub fn x_magnifies(self) -> bool {
        self.bits() & 1 != 0
    }

    /// Whether the Y axis magnifies.
    pub fn y_magnifies(self) -> bool {
        self.bits() & 2 != 0
    }
}

/// Shrink a `(lo, hi)` border pair so it fits in `min(source, dest)`.
fn fit_border(source: i64, dest: i64, lo: i64, hi: i64) -> (i64, i64) {
    let avail = source.min(dest);
    let total = lo + hi;
    if avail < total {
        let lo_fit = (avail * lo + total / 2) / total;
        log::trace!("border ({lo}, {hi}) shrunk to ({lo_fit}, {}) for extent {avail}", avail - lo_fit);
        (lo_fit, avail - lo_fit)
    } else {
        (lo, hi)
    }
}

/// Geometry of one axis after border fitting
#[derive(Debug, Clone, Copy)]
struct AxisGeometry {
    source: i64,
    dest: usize,
    lo: i64,
    hi: i64,
    reversed: bool,
}

impl AxisGeometry {
    fn new(source: u32, dest: i64, lo: u32, hi: u32) -> Self {
        let reversed = dest < 0;
        let dest_abs = dest.abs();
        let (lo, hi) = fit_border(i64::from(source), dest_abs, i64::from(lo), i64::from(hi));
        AxisGeometry {
            source: i64::from(source),
            dest: dest_abs as usize,
            lo,
            hi,
            reversed,
        }
    }

    /// The stretched interior, if the destination has room for one.
    fn center(&self) -> Option<(std::ops::Range<usize>, i64, i64)> {
        let dest = self.dest as i64;
        if dest > self.lo + self.hi {
            let ss = self.source - self.lo - self.hi;
            let dd = dest - self.lo - self.hi;
            Some((self.lo as usize..(dest - self.hi) as usize, ss, dd))
        } else {
            None
        }
    }

    fn finish<T>(&self, mut table: Vec<T>) -> Vec<T> {
        if self.reversed {
            table.reverse();
        }
        table
    }
}

/// Build the source index table of one axis.
///
/// `dest` may be negative, which mirrors the axis. Every index is below
/// `source`.
pub fn index_table(source: u32, dest: i64, lo: u32, hi: u32) -> Result<Vec<usize>> {
    let g = AxisGeometry::new(source, dest, lo, hi);
    let mut table = try_alloc(g.dest, 0usize)?;

    let mut acc: i64 = 0;
    let lo_end = (g.lo as usize).min(g.dest);
    for slot in &mut table[..lo_end] {
        *slot = (acc >> 16) as usize;
        acc += 1 << 16;
    }
    let mut next = lo_end;
    if let Some((range, ss, dd)) = g.center() {
        acc = g.lo << 16;
        let step = (ss << 16) / dd;
        for slot in &mut table[range.clone()] {
            *slot = (acc >> 16).min(g.source - 1) as usize;
            acc += step;
        }
        next = range.end;
    }
    acc = (g.source - g.hi) << 16;
    for slot in &mut table[next..] {
        *slot = (acc >> 16) as usize;
        acc += 1 << 16;
    }

    Ok(g.finish(table))
}

/// Build the anti-aliasing weights of one axis.
///
/// `magnify` selects the weight encoding; it comes from [`ScaleMode`]
/// and so reflects the cropped region, not `source`.
pub fn weight_table(source: u32, dest: i64, lo: u32, hi: u32, magnify: bool) -> Result<AxisWeights> {
    let g = AxisGeometry::new(source, dest, lo, hi);
    if magnify {
        let mut table = try_alloc(g.dest, 0u8)?;
        if let Some((range, ss, dd)) = g.center() {
            let step = (ss << 16) / dd;
            let mut acc: i64 = 0;
            for slot in &mut table[range] {
                *slot = if (acc >> 16) + g.lo >= g.source - 1 {
                    0
                } else {
                    ((acc >> 8) & 0xff) as u8
                };
                acc += step;
            }
        }
        Ok(AxisWeights::Magnify(g.finish(table)))
    } else {
        let mut table = try_alloc(g.dest, MinifyWeight::WHOLE)?;
        if let Some((range, ss, dd)) = g.center() {
            // a minifying axis always keeps at least one interior pixel
            let ss = ss.max(1);
            let step = (ss << 16) / dd;
            let run_length = ((dd << 14) / ss) + 1;
            let mut acc: i64 = 0;
            for slot in &mut table[range] {
                let leading = ((0x100 - ((acc >> 8) & 0xff)) * run_length) >> 8;
                *slot = MinifyWeight {
                    leading_weight: leading as u16,
                    run_length: run_length as u16,
                };
                acc += step;
            }
        }
        Ok(AxisWeights::Minify(g.finish(table)))
    }
}

/// Precomputed coverage tables for one scale call
///
/// Tables are built for the whole source image at the extent the cropped
/// region is scaled by, so a region scale reads a window of them starting
/// at the offsets returned by [`ScaleInfo::table_origin`].
#[derive(Debug, Clone)]
pub struct ScaleInfo {
    width: u32,
    height: u32,
    mode: ScaleMode,
    xpoints: Vec<usize>,
    ypoints: Vec<usize>,
    weights: Option<(AxisWeights, AxisWeights)>,
    region_w: u32,
    region_h: u32,
    dw: i32,
    dh: i32,
}

impl ScaleInfo {
    /// Build the tables for scaling a `region_w` x `region_h` window of a
    /// `width` x `height` image to `dw` x `dh`.
    ///
    /// Negative `dw` / `dh` mirror the axis. Weight tables are only built
    /// when `antialias` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if an extent is zero or the
    /// region is larger than the image, and [`Error::AllocationFailed`]
    /// if a table cannot be allocated.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        width: u32,
        height: u32,
        border: Border,
        region_w: u32,
        region_h: u32,
        dw: i32,
        dh: i32,
        antialias: bool,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if region_w == 0 || region_h == 0 || region_w > width || region_h > height {
            return Err(Error::InvalidParameter(format!(
                "region {region_w}x{region_h} does not fit a {width}x{height} image"
            )));
        }
        if dw == 0 || dh == 0 {
            return Err(Error::InvalidParameter(format!(
                "destination extent {dw}x{dh} is empty"
            )));
        }

        let scw = scaled_extent(dw, width, region_w);
        let sch = scaled_extent(dh, height, region_h);
        let mode = ScaleMode::classify(region_w, region_h, dw, dh);
        log::debug!(
            "scale {width}x{height} (region {region_w}x{region_h}) to {dw}x{dh}: \
             tables {scw}x{sch}, mode {mode:?}, antialias {antialias}"
        );

        let (left, right) = border.horizontal();
        let (top, bottom) = border.vertical();
        let xpoints = index_table(width, scw, left, right)?;
        let mut ypoints = index_table(height, sch, top, bottom)?;
        let stride = width as usize;
        for row in &mut ypoints {
            *row *= stride;
        }

        let weights = if antialias {
            Some((
                weight_table(width, scw, left, right, mode.x_magnifies())?,
                weight_table(height, sch, top, bottom, mode.y_magnifies())?,
            ))
        } else {
            None
        };

        Ok(ScaleInfo {
            width,
            height,
            mode,
            xpoints,
            ypoints,
            weights,
            region_w,
            region_h,
            dw,
            dh,
        })
    }

    /// Source image width, which is also the source row stride.
    pub fn source_width(&self) -> u32 {
        self.width
    }

    /// Source image height.
    pub fn source_height(&self) -> u32 {
        self.height
    }

    /// Axis mode selecting the area-averaging loop.
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Source column per destination column.
    pub fn xpoints(&self) -> &[usize] {
        &self.xpoints
    }

    /// Source row offset (`row * width`) per destination row.
    pub fn ypoints(&self) -> &[usize] {
        &self.ypoints
    }

    /// X and Y anti-aliasing weights, if built.
    pub fn weights(&self) -> Option<(&AxisWeights, &AxisWeights)> {
        self.weights.as_ref().map(|(x, y)| (x, y))
    }

    /// Whether anti-aliasing weights were built.
    pub fn has_weights(&self) -> bool {
        self.weights.is_some()
    }

    /// Offsets into the tables of the window covering a region whose
    /// top-left source pixel is at `(region_x, region_y)`.
    ///
    /// On a mirrored axis the window is taken from the reversed end of
    /// the table.
    pub fn table_origin(&self, region_x: u32, region_y: u32) -> (usize, usize) {
        let tx = table_offset(region_x, self.dw, self.region_w, self.xpoints.len());
        let ty = table_offset(region_y, self.dh, self.region_h, self.ypoints.len());
        (tx, ty)
    }
}

/// Extent the whole image is scaled to so that `region` maps onto `dest`.
/// Keeps the sign of `dest`.
fn scaled_extent(dest: i32, image: u32, region: u32) -> i64 {
    let abs = i64::from(dest.unsigned_abs()) * i64::from(image) / i64::from(region);
    if dest < 0 { -abs } else { abs }
}

fn table_offset(origin: u32, dest: i32, region: u32, table_len: usize) -> usize {
    let extent = dest.unsigned_abs() as usize;
    let forward = u64::from(origin) * u64::from(dest.unsigned_abs()) / u64::from(region);
    let forward = forward as usize;
    if dest < 0 {
        table_len.saturating_sub(forward + extent)
    } else {
        forward
    }
}
