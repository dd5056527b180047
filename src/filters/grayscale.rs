//! Luminance reduction of a color image.
use crate::image::{ImageGray, ImageRgb};

const WEIGHT_R: f64 = 0.229;
const WEIGHT_G: f64 = 0.587;
const WEIGHT_B: f64 = 0.114;

/// Per-pixel weighted luminance, truncated to 8 bits.
///
/// The weights sum to 0.93, so the result is always in range without
/// clamping. An empty input yields an empty output.
pub fn grayscale(image: &ImageRgb) -> ImageGray {
    let mut out = ImageGray::new(image.w, image.h);
    for y in 0..image.h {
        let src = image.row(y);
        let dst = out.row_mut(y);
        for (pixel, gray) in src.iter().zip(dst.iter_mut()) {
            let luma = WEIGHT_R * pixel.r as f64
                + WEIGHT_G * pixel.g as f64
                + WEIGHT_B * pixel.b as f64;
            *gray = luma as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Rgb;

    fn uniform(w: usize, h: usize, v: u8) -> ImageRgb {
        ImageRgb::from_vec(w, h, vec![Rgb::new(v, v, v); w * h])
    }

    #[test]
    fn boundary_values_truncate_exactly() {
        assert_eq!(grayscale(&uniform(1, 1, 0)).get(0, 0), 0);
        // 255 * 0.93 = 237.15
        assert_eq!(grayscale(&uniform(1, 1, 255)).get(0, 0), 237);
        // 128 * 0.93 = 119.04
        assert_eq!(grayscale(&uniform(1, 1, 128)).get(0, 0), 119);
    }

    #[test]
    fn channels_are_weighted_independently() {
        let img = ImageRgb::from_vec(1, 1, vec![Rgb::new(100, 0, 0)]);
        assert_eq!(grayscale(&img).get(0, 0), 22); // 100 * 0.229
        let img = ImageRgb::from_vec(1, 1, vec![Rgb::new(0, 100, 0)]);
        assert_eq!(grayscale(&img).get(0, 0), 58); // 100 * 0.587
        let img = ImageRgb::from_vec(1, 1, vec![Rgb::new(0, 0, 100)]);
        assert_eq!(grayscale(&img).get(0, 0), 11); // 100 * 0.114
    }

    #[test]
    fn empty_input_maps_to_empty_output() {
        let out = grayscale(&ImageRgb::new(0, 0));
        assert!(out.is_empty());
    }
}
