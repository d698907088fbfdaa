//! Area-averaging resampling
//!
//! Each destination pixel is the coverage-weighted average of the source
//! pixels under it. One loop exists per [`ScaleMode`]:
//!
//! - up/up: bilinear blend of up to four neighbours (Q8 weights)
//! - down-vertical: box sum down a column, blended across X
//! - down-horizontal: box sum along a row, blended across Y
//! - down/down: 2-D box sum
//!
//! Each loop is generic over `ALPHA`. Without alpha the alpha lane is
//! never accumulated and every output pixel is written opaque.
//!
//! The shift amounts and their order are part of the output: results are
//! compared bit for bit against stored checksums.

use super::coverage::{AxisWeights, MinifyWeight, ScaleInfo, ScaleMode};
use super::sample::{DestRegion, scale_sample};
use imaging_core::color::{self, OPAQUE};

/// Lane `[a, r, g, b]` index of the first accumulated channel.
#[inline(always)]
const fn first_lane<const ALPHA: bool>() -> usize {
    if ALPHA { 0 } else { 1 }
}

#[inline(always)]
fn finish<const ALPHA: bool>(mut acc: [i32; 4]) -> u32 {
    if !ALPHA {
        acc[0] = 0xff;
    }
    color::pack_lanes(acc)
}

#[inline(always)]
fn copy<const ALPHA: bool>(pixel: u32) -> u32 {
    if ALPHA { pixel } else { pixel | OPAQUE }
}

/// `(a * (256 - w) + b * w) >> 8` per lane.
#[inline(always)]
fn blend2<const ALPHA: bool>(a: u32, b: u32, w: i32) -> u32 {
    let (la, lb) = (color::lanes(a), color::lanes(b));
    let mut acc = [0; 4];
    for c in first_lane::<ALPHA>()..4 {
        acc[c] = (la[c] * (256 - w) + lb[c] * w) >> 8;
    }
    finish::<ALPHA>(acc)
}

/// Q14-weighted sum of a run of pixels starting at `start`, `step` apart,
/// each term `(v * w) >> 10`.
#[inline(always)]
fn run_sum<const ALPHA: bool>(src: &[u32], start: usize, step: usize, weight: MinifyWeight) -> [i32; 4] {
    let mut acc = [0; 4];
    let mut pos = start;
    for w in weight.run() {
        debug_assert!(pos < src.len(), "source index {pos} out of {}", src.len());
        let l = color::lanes(src[pos]);
        for c in first_lane::<ALPHA>()..4 {
            acc[c] += (l[c] * w) >> 10;
        }
        pos += step;
    }
    acc
}

/// Combine two run sums with a Q8 weight, or scale a single one.
#[inline(always)]
fn combine<const ALPHA: bool>(s0: [i32; 4], s1: Option<[i32; 4]>, w: i32) -> u32 {
    let mut acc = [0; 4];
    for c in first_lane::<ALPHA>()..4 {
        acc[c] = match s1 {
            Some(s1) => (s0[c] * (256 - w) + s1[c] * w) >> 12,
            None => s0[c] >> 4,
        };
    }
    finish::<ALPHA>(acc)
}

/// Anti-aliased scale of `src` into `region` of `dest`.
///
/// `has_alpha` selects whether the alpha lane is averaged or forced to
/// `0xff`. If `info` was built without weights the nearest pixel is
/// sampled instead.
///
/// # Panics
///
/// Panics if `region` reaches outside `dest` or outside the tables of
/// `info`.
pub fn scale_aa(info: &ScaleInfo, src: &[u32], dest: &mut [u32], region: &DestRegion, has_alpha: bool) {
    if has_alpha {
        resample::<true>(info, src, dest, region);
    } else {
        resample::<false>(info, src, dest, region);
    }
}

fn resample<const ALPHA: bool>(info: &ScaleInfo, src: &[u32], dest: &mut [u32], region: &DestRegion) {
    let Some((xw, yw)) = info.weights() else {
        log::warn!("no anti-aliasing tables built, sampling instead");
        scale_sample(info, src, dest, region);
        return;
    };
    region.debug_check(info, src, dest);
    match (info.mode(), xw, yw) {
        (ScaleMode::UpUp, AxisWeights::Magnify(xw), AxisWeights::Magnify(yw)) => {
            up_up::<ALPHA>(info, xw, yw, src, dest, region)
        }
        (ScaleMode::DownVertical, AxisWeights::Magnify(xw), AxisWeights::Minify(yw)) => {
            down_vertical::<ALPHA>(info, xw, yw, src, dest, region)
        }
        (ScaleMode::DownHorizontal, AxisWeights::Minify(xw), AxisWeights::Magnify(yw)) => {
            down_horizontal::<ALPHA>(info, xw, yw, src, dest, region)
        }
        (ScaleMode::DownDown, AxisWeights::Minify(xw), AxisWeights::Minify(yw)) => {
            down_down::<ALPHA>(info, xw, yw, src, dest, region)
        }
        (mode, ..) => unreachable!("weight tables do not match {mode:?}"),
    }
}

/// Iterate the rows of `region`: `(table row, destination row slice)`.
fn rows<'a>(dest: &'a mut [u32], region: &'a DestRegion) -> impl Iterator<Item = (usize, &'a mut [u32])> + 'a {
    let width = region.width;
    let offset = region.row_start(0);
    let stride = region.stride.max(1);
    dest[offset..]
        .chunks_mut(stride)
        .take(region.height)
        .enumerate()
        .map(move |(y, row)| (region.table_y + y, &mut row[..width]))
}

fn up_up<const ALPHA: bool>(
    info: &ScaleInfo,
    xw: &[u8],
    yw: &[u8],
    src: &[u32],
    dest: &mut [u32],
    region: &DestRegion,
) {
    let sow = info.source_width() as usize;
    let xpoints = info.xpoints();
    let ypoints = info.ypoints();
    let lo = first_lane::<ALPHA>();

    for (ty, out) in rows(dest, region) {
        let row = ypoints[ty];
        let yap = i32::from(yw[ty]);
        for (x, d) in out.iter_mut().enumerate() {
            let tx = region.table_x + x;
            let pos = row + xpoints[tx];
            let xap = i32::from(xw[tx]);
            *d = match (xap > 0, yap > 0) {
                (true, true) => {
                    debug_assert!(pos + sow + 1 < src.len());
                    let p0 = color::lanes(src[pos]);
                    let p1 = color::lanes(src[pos + 1]);
                    let p2 = color::lanes(src[pos + sow + 1]);
                    let p3 = color::lanes(src[pos + sow]);
                    let mut acc = [0; 4];
                    for c in lo..4 {
                        let top = p0[c] * (256 - xap) + p1[c] * xap;
                        let bottom = p2[c] * xap + p3[c] * (256 - xap);
                        acc[c] = (bottom * yap + top * (256 - yap)) >> 16;
                    }
                    finish::<ALPHA>(acc)
                }
                (false, true) => blend2::<ALPHA>(src[pos], src[pos + sow], yap),
                (true, false) => blend2::<ALPHA>(src[pos], src[pos + 1], xap),
                (false, false) => copy::<ALPHA>(src[pos]),
            };
        }
    }
}

fn down_vertical<const ALPHA: bool>(
    info: &ScaleInfo,
    xw: &[u8],
    yw: &[MinifyWeight],
    src: &[u32],
    dest: &mut [u32],
    region: &DestRegion,
) {
    let sow = info.source_width() as usize;
    let xpoints = info.xpoints();
    let ypoints = info.ypoints();

    for (ty, out) in rows(dest, region) {
        let row = ypoints[ty];
        let wy = yw[ty];
        for (x, d) in out.iter_mut().enumerate() {
            let tx = region.table_x + x;
            let pos = row + xpoints[tx];
            let xap = i32::from(xw[tx]);
            let s0 = run_sum::<ALPHA>(src, pos, sow, wy);
            let s1 = (xap > 0).then(|| run_sum::<ALPHA>(src, pos + 1, sow, wy));
            *d = combine::<ALPHA>(s0, s1, xap);
        }
    }
}

fn down_horizontal<const ALPHA: bool>(
    info: &ScaleInfo,
    xw: &[MinifyWeight],
    yw: &[u8],
    src: &[u32],
    dest: &mut [u32],
    region: &DestRegion,
) {
    let sow = info.source_width() as usize;
    let xpoints = info.xpoints();
    let ypoints = info.ypoints();

    for (ty, out) in rows(dest, region) {
        let row = ypoints[ty];
        let yap = i32::from(yw[ty]);
        for (x, d) in out.iter_mut().enumerate() {
            let tx = region.table_x + x;
            let pos = row + xpoints[tx];
            let wx = xw[tx];
            let s0 = run_sum::<ALPHA>(src, pos, 1, wx);
            let s1 = (yap > 0).then(|| run_sum::<ALPHA>(src, pos + sow, 1, wx));
            *d = combine::<ALPHA>(s0, s1, yap);
        }
    }
}

fn down_down<const ALPHA: bool>(
    info: &ScaleInfo,
    xw: &[MinifyWeight],
    yw: &[MinifyWeight],
    src: &[u32],
    dest: &mut [u32],
    region: &DestRegion,
) {
    let sow = info.source_width() as usize;
    let xpoints = info.xpoints();
    let ypoints = info.ypoints();
    let lo = first_lane::<ALPHA>();

    for (ty, out) in rows(dest, region) {
        let row = ypoints[ty];
        let wy = yw[ty];
        for (x, d) in out.iter_mut().enumerate() {
            let tx = region.table_x + x;
            let wx = xw[tx];
            let mut acc = [0; 4];
            let mut line = row + xpoints[tx];
            for ycov in wy.run() {
                let mut rx = [0; 4];
                let mut pos = line;
                for xcov in wx.run() {
                    debug_assert!(pos < src.len(), "source index {pos} out of {}", src.len());
                    let l = color::lanes(src[pos]);
                    for c in lo..4 {
                        rx[c] += (l[c] * xcov) >> 9;
                    }
                    pos += 1;
                }
                for c in lo..4 {
                    acc[c] += (rx[c] * ycov) >> 14;
                }
                line += sow;
            }
            for v in &mut acc[lo..] {
                *v = (*v >> 5) & 0xff;
            }
            *d = finish::<ALPHA>(acc);
        }
    }
}
