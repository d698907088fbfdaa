//! imaging-transform - Geometric transformations for the imaging library
//!
//! This crate provides:
//!
//! - Area-weighted scaling with independent up/down scaling per axis,
//!   nearest-neighbour or anti-aliased, with border-preserving
//!   (nine-slice) edges
//! - Cropped-region scaling and scaling into a rectangle of an existing
//!   image with clipping
//! - Horizontal and vertical flips and 180 degree rotation

mod error;
pub mod flip;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use flip::{flip_horizontal, flip_vertical, rotate_180};
pub use scale::{
    DestRegion, ScaleInfo, ScaleMode, ScaleOptions, scale, scale_aa, scale_onto, scale_region,
    scale_sample,
};
