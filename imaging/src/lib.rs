//! imaging - ARGB image handling with area-weighted scaling
//!
//! # Overview
//!
//! - 32-bit ARGB image container with shared, copy-on-write storage
//! - Scaling with independent up/down factors per axis, nearest-sample or
//!   anti-aliased, with border-preserving (nine-slice) edges
//! - Cropped-region scaling, scaling into part of an existing image, flips
//! - PNG I/O
//!
//! # Example
//!
//! ```
//! use imaging::transform::{ScaleOptions, scale};
//! use imaging::{Border, Image};
//!
//! let img = Image::new(32, 32).unwrap().with_border(Border::uniform(4));
//! let big = scale(&img, 100, 60, &ScaleOptions::default()).unwrap();
//! assert_eq!((big.width(), big.height()), (100, 60));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use imaging_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use imaging_io as io;
pub use imaging_transform as transform;
