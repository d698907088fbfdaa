//! Image - The ARGB image container
//!
//! The `Image` structure is the canonical in-memory pixel format of the
//! library: one 32-bit ARGB word per pixel, rows stored contiguously with
//! no padding.
//!
//! # Pixel layout
//!
//! - Row-major, `width` pixels per row, row `y` starts at `y * width`
//! - Each pixel is `0xAARRGGBB`
//! - `has_alpha` tells consumers whether the alpha byte carries meaning;
//!   images without alpha are expected to hold `0xff` there
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;
mod border;
mod checksum;
mod region;

pub use border::Border;
pub use checksum::crc32;
pub use region::Region;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Largest accepted width or height.
///
/// Keeps `width * height * 4` inside a 32-bit byte length and every
/// `extent << 16` fixed-point value inside an `i32`.
pub const MAX_DIMENSION: u32 = 32767;

/// Image file format the pixels were read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown or in-memory
    #[default]
    Unknown,
    /// PNG format
    Png,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
        }
    }
}

/// Allocate a vector of `len` copies of `value`, reporting exhaustion as
/// [`Error::AllocationFailed`] instead of aborting.
pub fn try_alloc<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed)?;
    v.resize(len, value);
    Ok(v)
}

/// Check that `width` and `height` lie in `[1, MAX_DIMENSION]`.
pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

/// Internal image data
#[derive(Debug)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Whether the alpha byte is meaningful
    has_alpha: bool,
    /// Edge widths preserved by scaling
    border: Border,
    /// Input file format
    format: ImageFormat,
    /// The pixel data, `width * height` ARGB words
    data: Vec<u32>,
}

impl ImageData {
    fn duplicate(&self) -> Self {
        ImageData {
            width: self.width,
            height: self.height,
            has_alpha: self.has_alpha,
            border: self.border,
            format: self.format,
            data: self.data.clone(),
        }
    }
}

/// Image - Main ARGB image container
///
/// `Image` uses reference counting via `Arc` for efficient cloning.
///
/// # Examples
///
/// ```
/// use imaging_core::Image;
///
/// let img = Image::new(640, 480).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert!(!img.has_alpha());
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with the specified dimensions.
    ///
    /// All pixels are initialized to zero and `has_alpha` is false.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or
    /// exceeds [`MAX_DIMENSION`], and [`Error::AllocationFailed`] if the
    /// pixel buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        let data = try_alloc(width as usize * height as usize, 0u32)?;
        Ok(Self::from_parts(width, height, false, data))
    }

    /// Create an image from an existing ARGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for out-of-range dimensions and
    /// [`Error::BufferLength`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, has_alpha: bool, data: Vec<u32>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(width, height, has_alpha, data))
    }

    fn from_parts(width: u32, height: u32, has_alpha: bool, data: Vec<u32>) -> Self {
        Image {
            inner: Arc::new(ImageData {
                width,
                height,
                has_alpha,
                border: Border::default(),
                format: ImageFormat::Unknown,
                data,
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Whether the alpha channel carries meaning.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.has_alpha
    }

    /// Get the border preserved by scaling.
    #[inline]
    pub fn border(&self) -> Border {
        self.inner.border
    }

    /// Get the input file format.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.inner.format
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Create a new zeroed image with the same dimensions and metadata.
    pub fn create_template(&self) -> Result<Self> {
        let data = try_alloc(self.inner.data.len(), 0u32)?;
        Ok(Image {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                has_alpha: self.inner.has_alpha,
                border: self.inner.border,
                format: self.inner.format,
                data,
            }),
        })
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Check if two images have the same size and identical pixels.
    pub fn equals(&self, other: &Image) -> bool {
        self.sizes_equal(other) && self.inner.data == other.inner.data
    }

    /// Write image metadata to a writer (for debugging).
    pub fn print_info(&self, writer: &mut impl std::io::Write, label: Option<&str>) -> Result<()> {
        if let Some(text) = label {
            writeln!(writer, "  Image Info for {text}:")?;
        }
        writeln!(
            writer,
            "    width = {}, height = {}, has_alpha = {}",
            self.inner.width, self.inner.height, self.inner.has_alpha
        )?;
        let b = self.inner.border;
        writeln!(
            writer,
            "    border: left = {}, right = {}, top = {}, bottom = {}",
            b.left, b.right, b.top, b.bottom
        )?;
        writeln!(writer, "    input format: {}", self.inner.format.extension())?;
        writeln!(writer, "    crc32 = {}", self.crc32())?;
        Ok(())
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Image {
            inner: Arc::new(self.inner.duplicate()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Get mutable access, copying the data only if it is shared.
    pub fn into_mut(self) -> ImageMut {
        match self.try_into_mut() {
            Ok(m) => m,
            Err(shared) => shared.to_mut(),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: self.inner.duplicate(),
        }
    }
}

/// Mutable image
///
/// Allows modification of pixel data and metadata. Convert back to an
/// immutable [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Whether the alpha channel carries meaning.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.has_alpha
    }

    /// Set whether the alpha channel carries meaning.
    pub fn set_has_alpha(&mut self, has_alpha: bool) {
        self.inner.has_alpha = has_alpha;
    }

    /// Get the border preserved by scaling.
    #[inline]
    pub fn border(&self) -> Border {
        self.inner.border
    }

    /// Set the border preserved by scaling.
    pub fn set_border(&mut self, border: Border) {
        self.inner.border = border;
    }

    /// Get the input file format.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.inner.format
    }

    /// Set the input file format.
    pub fn set_format(&mut self, format: ImageFormat) {
        self.inner.format = format;
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: u32) {
        self.inner.data.fill(pixel);
    }

    /// Set every pixel inside `region` (clipped to the image) to `pixel`.
    pub fn fill_region(&mut self, region: Region, pixel: u32) {
        let Some(clip) = region.clip_to(self.inner.width, self.inner.height) else {
            return;
        };
        for y in clip.y..clip.y + clip.h {
            let row = self.row_mut(y as u32);
            row[clip.x as usize..(clip.x + clip.w) as usize].fill(pixel);
        }
    }
}

impl From<ImageMut> for Image {
    fn from(m: ImageMut) -> Self {
        Image {
            inner: Arc::new(m.inner),
        }
    }
}
