#![doc = include_str!("../README.md")]

pub mod bmp;
pub mod error;
pub mod filters;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Codec entry points and the headers they expose for diagnostics.
pub use crate::bmp::{load, save, DecodedBmp, EncodeBgr, FileHeader, InfoHeader};

// Pixel engine.
pub use crate::filters::{gaussian, grayscale, sobel, SobelOutput};

pub use crate::error::{Error, Result};
pub use crate::image::{Image, ImageGray, ImageI32, ImageRgb, Rgb};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use bmp_filters::prelude::*;
///
/// # fn main() -> bmp_filters::Result<()> {
/// let decoded = bmp_filters::load("input.bmp".as_ref())?;
/// let mut gray = grayscale(&decoded.pixels);
/// gaussian(&mut gray, 3)?;
/// bmp_filters::save("output.bmp".as_ref(), &gray)?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::filters::{gaussian, grayscale, sobel};
    pub use crate::image::{Image, ImageGray, ImageRgb, Rgb};
}
