//! Sobel edge detection with magnitude remapping.
//!
//! Convolves the fixed 3×3 kernel pair against the luminance image with
//! mirror-reflected borders, keeping the signed responses `gx`, `gy` as
//! auxiliary outputs and remapping `sqrt(gx² + gy²)` from its theoretical
//! range into 8 bits.
use log::debug;

use super::support::{reflect_index, remap};
use crate::image::{ImageGray, ImageI32};

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Per-pixel Sobel responses.
#[derive(Clone, Debug)]
pub struct SobelOutput {
    /// Gradient magnitude remapped into [0, 255]
    pub magnitude: ImageGray,
    /// Horizontal derivative (convolution with the X kernel)
    pub gx: ImageI32,
    /// Vertical derivative (convolution with the Y kernel)
    pub gy: ImageI32,
}

/// Compute Sobel gradients and remapped magnitude for a luminance image.
pub fn sobel(image: &ImageGray) -> SobelOutput {
    let w = image.w;
    let h = image.h;
    let mut magnitude = ImageGray::new(w, h);
    let mut gx = ImageI32::new(w, h);
    let mut gy = ImageI32::new(w, h);

    if image.is_empty() {
        return SobelOutput { magnitude, gx, gy };
    }
    debug!("sobel: {}x{} image", w, h);

    // Largest possible magnitude for 8-bit inputs: both responses at 255.
    let max_magnitude = (2.0f64 * 255.0 * 255.0).sqrt();

    for y in 0..h {
        let out_mag = magnitude.row_mut(y);
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        for x in 0..w {
            let mut sum_x = 0i32;
            let mut sum_y = 0i32;
            for (ky, (kx_row, ky_row)) in
                SOBEL_KERNEL_X.iter().zip(SOBEL_KERNEL_Y.iter()).enumerate()
            {
                let ny = reflect_index(y as isize + ky as isize - 1, h);
                let src = image.row(ny);
                for kx in 0..3 {
                    let nx = reflect_index(x as isize + kx as isize - 1, w);
                    let sample = src[nx] as i32;
                    sum_x += sample * kx_row[kx];
                    sum_y += sample * ky_row[kx];
                }
            }
            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            let g = ((sum_x as f64).powi(2) + (sum_y as f64).powi(2)).sqrt();
            out_mag[x] = remap(g, 0.0, max_magnitude, 0.0, 255.0) as u8;
        }
    }

    SobelOutput { magnitude, gx, gy }
}
