pub mod buffer;
pub mod pixel;

pub use self::buffer::{Image, ImageGray, ImageI32, ImageRgb};
pub use self::pixel::Rgb;
