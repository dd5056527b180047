//! Owned single-plane image in row-major layout (stride == width).
//!
//! Generic over the pixel type: `Rgb` for decoded color data, `u8` for
//! luminance, `i32` for signed gradient responses. Provides indexed access
//! and row slices; every row has the same length by construction.
use super::pixel::Rgb;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<P: Copy> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<P>,
}

/// Decoded 24-bit color image.
pub type ImageRgb = Image<Rgb>;
/// 8-bit luminance image.
pub type ImageGray = Image<u8>;
/// Signed per-pixel values (Sobel gradient responses).
pub type ImageI32 = Image<i32>;

impl<P: Copy + Default> Image<P> {
    /// Construct a default-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![P::default(); w * h],
        }
    }
}

impl<P: Copy> Image<P> {
    /// Wrap an existing row-major buffer. `data` must hold exactly `w * h`
    /// pixels.
    pub fn from_vec(w: usize, h: usize, data: Vec<P>) -> Self {
        assert_eq!(data.len(), w * h, "buffer length must equal w * h");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> P {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: P) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[P] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [P] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> {
        self.data.chunks_exact(self.stride.max(1)).take(self.h)
    }

    /// Iterate over mutable rows top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [P]> {
        self.data.chunks_exact_mut(self.stride.max(1)).take(self.h)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}
