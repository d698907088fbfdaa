//! Scaling operations
//!
//! Area-weighted scaling of ARGB images. Two resamplers share one set of
//! precomputed coverage tables ([`ScaleInfo`]):
//!
//! - **Sampling**: nearest source pixel, copied verbatim
//! - **Anti-aliased**: area averaging, with bilinear blending on
//!   magnifying axes and box sums on minifying ones
//!
//! Each axis is scaled independently, so an image can be stretched in X
//! while shrinking in Y. A negative destination extent mirrors that axis.
//! The image's [`Border`](imaging_core::Border) bands are kept 1:1
//! (nine-slice scaling).
//!
//! # Examples
//!
//! ```
//! use imaging_core::Image;
//! use imaging_transform::{ScaleOptions, scale};
//!
//! let img = Image::new(64, 48).unwrap();
//! let half = scale(&img, 32, 24, &ScaleOptions::default()).unwrap();
//! assert_eq!((half.width(), half.height()), (32, 24));
//! ```

mod area;
mod coverage;
mod sample;

pub use area::scale_aa;
pub use coverage::{
    AxisWeights, CoverageRun, FULL_COVERAGE, MinifyWeight, ScaleInfo, ScaleMode, index_table,
    weight_table,
};
pub use sample::{DestRegion, scale_sample};

use crate::{TransformError, TransformResult};
use imaging_core::{Image, ImageMut, MAX_DIMENSION, Region};

/// Options for scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleOptions {
    /// Average source pixels instead of sampling the nearest one
    pub antialias: bool,
    /// Whether to average the alpha channel (None = use the image flag)
    pub has_alpha: Option<bool>,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            antialias: true,
            has_alpha: None,
        }
    }
}

impl ScaleOptions {
    /// Options for nearest-neighbour sampling
    pub fn sampling() -> Self {
        Self {
            antialias: false,
            ..Default::default()
        }
    }

    /// Set whether to anti-alias
    pub fn antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Override the image's alpha flag
    pub fn with_alpha(mut self, has_alpha: bool) -> Self {
        self.has_alpha = Some(has_alpha);
        self
    }

    fn alpha_for(&self, img: &Image) -> bool {
        self.has_alpha.unwrap_or_else(|| img.has_alpha())
    }
}

fn check_extent(name: &str, extent: i32) -> TransformResult<()> {
    if extent == 0 || extent.unsigned_abs() > MAX_DIMENSION {
        return Err(TransformError::InvalidParameters(format!(
            "{name} must be non-zero and at most {MAX_DIMENSION} in magnitude, got {extent}"
        )));
    }
    Ok(())
}

fn check_source_region(img: &Image, region: Region) -> TransformResult<()> {
    if !region.fits_in(img.width(), img.height()) {
        return Err(TransformError::InvalidParameters(format!(
            "source region {region:?} is not inside the {}x{} image",
            img.width(),
            img.height()
        )));
    }
    Ok(())
}

fn resample(info: &ScaleInfo, src: &[u32], dest: &mut [u32], region: &DestRegion, has_alpha: bool) {
    if info.has_weights() {
        scale_aa(info, src, dest, region, has_alpha);
    } else {
        scale_sample(info, src, dest, region);
    }
}

/// Scale a whole image to `|dw|` x `|dh|`.
///
/// A negative `dw` mirrors the result left to right, a negative `dh`
/// top to bottom.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if an extent is zero or
/// larger than [`MAX_DIMENSION`].
pub fn scale(img: &Image, dw: i32, dh: i32, options: &ScaleOptions) -> TransformResult<Image> {
    scale_region(img, Region::full(img.width(), img.height()), dw, dh, options)
}

/// Scale the `region` window of an image to `|dw|` x `|dh|`.
///
/// Pixels around the window still feed the anti-aliasing filter, so the
/// result equals the matching window of scaling the whole image by the
/// same factor.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if an extent is invalid
/// or `region` is empty or not inside the image.
pub fn scale_region(
    img: &Image,
    region: Region,
    dw: i32,
    dh: i32,
    options: &ScaleOptions,
) -> TransformResult<Image> {
    check_extent("dw", dw)?;
    check_extent("dh", dh)?;
    check_source_region(img, region)?;

    let info = ScaleInfo::new(
        img.width(),
        img.height(),
        img.border(),
        region.w as u32,
        region.h as u32,
        dw,
        dh,
        options.antialias,
    )?;
    let (table_x, table_y) = info.table_origin(region.x as u32, region.y as u32);

    let (width, height) = (dw.unsigned_abs(), dh.unsigned_abs());
    let mut out = Image::new(width, height)?.into_mut();
    let dest = DestRegion {
        table_x,
        table_y,
        ..DestRegion::full(width as usize, height as usize)
    };
    let has_alpha = options.alpha_for(img);
    resample(&info, img.data(), out.data_mut(), &dest, has_alpha);
    out.set_has_alpha(has_alpha);
    Ok(out.into())
}

/// Scale the `src_region` window of `src` into the `dst_region`
/// rectangle of `dst`.
///
/// `dst_region` may have negative width or height to mirror the result;
/// the rectangle then spans `|w|` x `|h|` pixels from its origin. Parts
/// of the rectangle outside `dst` are clipped and pixels of `dst`
/// outside it are left untouched. The alpha flag of `dst` is not
/// changed.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if an extent is invalid
/// or `src_region` is not inside `src`.
pub fn scale_onto(
    dst: &mut ImageMut,
    src: &Image,
    src_region: Region,
    dst_region: Region,
    options: &ScaleOptions,
) -> TransformResult<()> {
    check_extent("destination width", dst_region.w)?;
    check_extent("destination height", dst_region.h)?;
    check_source_region(src, src_region)?;

    let placed = Region::new(
        dst_region.x,
        dst_region.y,
        dst_region.w.abs(),
        dst_region.h.abs(),
    );
    let Some(clip) = placed.clip_to(dst.width(), dst.height()) else {
        log::debug!("scale target {dst_region:?} lies outside the destination");
        return Ok(());
    };

    let info = ScaleInfo::new(
        src.width(),
        src.height(),
        src.border(),
        src_region.w as u32,
        src_region.h as u32,
        dst_region.w,
        dst_region.h,
        options.antialias,
    )?;
    let (table_x, table_y) = info.table_origin(src_region.x as u32, src_region.y as u32);

    let dest = DestRegion {
        table_x: table_x + (clip.x - placed.x) as usize,
        table_y: table_y + (clip.y - placed.y) as usize,
        x: clip.x as usize,
        y: clip.y as usize,
        width: clip.w as usize,
        height: clip.h as usize,
        stride: dst.width() as usize,
    };
    resample(&info, src.data(), dst.data_mut(), &dest, options.alpha_for(src));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use imaging_core::Border;

    fn ramp(w: u32, h: u32) -> Image {
        let data = (0..w * h).map(|i| 0xff000000 | (i * 0x010203)).collect();
        Image::from_data(w, h, false, data).unwrap()
    }

    #[test]
    fn test_options() {
        let opts = ScaleOptions::default();
        assert!(opts.antialias);
        assert_eq!(opts.has_alpha, None);
        let opts = ScaleOptions::sampling().with_alpha(true);
        assert!(!opts.antialias);
        assert_eq!(opts.has_alpha, Some(true));
        assert!(ScaleOptions::sampling().antialias(true).antialias);
    }

    #[test]
    fn test_identity() {
        let img = ramp(7, 5);
        for opts in [ScaleOptions::default(), ScaleOptions::sampling()] {
            let out = scale(&img, 7, 5, &opts).unwrap();
            assert!(out.equals(&img));
        }
    }

    #[test]
    fn test_invalid_extents() {
        let img = ramp(4, 4);
        let opts = ScaleOptions::default();
        assert!(scale(&img, 0, 4, &opts).is_err());
        assert!(scale(&img, 4, 0, &opts).is_err());
        assert!(scale(&img, 40000, 4, &opts).is_err());
        assert!(scale_region(&img, Region::new(2, 2, 3, 3), 4, 4, &opts).is_err());
        assert!(scale_region(&img, Region::new(0, 0, 0, 3), 4, 4, &opts).is_err());
    }

    #[test]
    fn test_alpha_flag() {
        let img = Image::from_data(2, 2, true, vec![0x80102030; 4]).unwrap();
        let out = scale(&img, 3, 3, &ScaleOptions::default()).unwrap();
        assert!(out.has_alpha());
        assert!(out.data().iter().all(|&p| p == 0x80102030));

        let opaque = scale(&img, 3, 3, &ScaleOptions::default().with_alpha(false)).unwrap();
        assert!(!opaque.has_alpha());
        assert!(opaque.data().iter().all(|&p| p == 0xff102030));
    }

    #[test]
    fn test_sampling_keeps_alpha_verbatim() {
        let img = Image::from_data(1, 1, false, vec![0x12345678]).unwrap();
        let out = scale(&img, 2, 2, &ScaleOptions::sampling()).unwrap();
        assert!(out.data().iter().all(|&p| p == 0x12345678));
    }

    #[test]
    fn test_border_kept_when_shrinking() {
        let img = ramp(10, 10).with_border(Border::uniform(2));
        let out = scale(&img, 6, 6, &ScaleOptions::sampling()).unwrap();
        assert_eq!(&out.row(0)[..2], &img.row(0)[..2]);
        assert_eq!(&out.row(5)[4..], &img.row(9)[8..]);
    }

    #[test]
    fn test_scale_onto_fully_outside() {
        let src = ramp(4, 4);
        let mut dst = Image::new(5, 5).unwrap().into_mut();
        let opts = ScaleOptions::default();
        scale_onto(&mut dst, &src, Region::full(4, 4), Region::new(6, 0, 3, 3), &opts).unwrap();
        assert!(dst.data().iter().all(|&p| p == 0));
    }
}
