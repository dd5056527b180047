//! Codec for the uncompressed 24-bit BMP container format.
//!
//! Stateless in both directions: `load` turns a byte stream into headers plus
//! an `Image<Rgb>`, `save` turns any `Image<P: EncodeBgr>` back into a BMP
//! byte stream with headers recomputed from the image dimensions.
//! The two directions agree on row order (on-disk order, no vertical flip).
pub mod decode;
pub mod encode;
pub mod header;

pub use decode::{load, DecodedBmp};
pub use encode::{save, EncodeBgr};
pub use header::{FileHeader, InfoHeader};
