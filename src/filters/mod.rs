//! Pixel-processing engine: grayscale reduction, Gaussian smoothing, Sobel
//! edge detection.
//!
//! Filters depend only on the `Image` data model, never on the codec; the two
//! compose strictly through owned pixel buffers. Convolutions handle borders
//! by mirror reflection (see [`support::reflect_index`]).
pub mod gaussian;
pub mod grayscale;
pub mod sobel;
pub mod support;

pub use gaussian::gaussian;
pub use grayscale::grayscale;
pub use sobel::{sobel, SobelOutput};
pub use support::{reflect_index, remap};
