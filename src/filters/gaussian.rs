//! Gaussian smoothing with a dense normalized 2D kernel and mirror-reflected
//! borders.
use log::debug;

use super::support::reflect_index;
use crate::error::{Error, Result};
use crate::image::ImageGray;

/// Blur `image` in place with a square kernel of side `2*radius + 1`.
///
/// Every output pixel is a pure function of the pre-filter image: the result
/// is computed into a fresh buffer and swapped in wholesale, never written
/// over pixels that later samples still read. `radius == 0` is the identity;
/// a negative radius is rejected.
pub fn gaussian(image: &mut ImageGray, radius: i32) -> Result<()> {
    if radius < 0 {
        return Err(Error::InvalidRadius(radius));
    }
    if image.is_empty() {
        return Ok(());
    }

    let kernel = build_kernel(radius);
    let radius = radius as isize;
    let side = (2 * radius + 1) as usize;
    debug!("gaussian blur: {}x{} kernel on {}x{} image", side, side, image.w, image.h);

    let mut out = ImageGray::new(image.w, image.h);
    for y in 0..image.h {
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let mut acc = 0.0f64;
            for i in -radius..=radius {
                let ny = reflect_index(y as isize + i, image.h);
                let src = image.row(ny);
                let k_row = &kernel[((i + radius) as usize) * side..];
                for j in -radius..=radius {
                    let nx = reflect_index(x as isize + j, image.w);
                    acc += src[nx] as f64 * k_row[(j + radius) as usize];
                }
            }
            *dst_px = acc.clamp(0.0, 255.0) as u8;
        }
    }
    *image = out;
    Ok(())
}

/// Dense `(2r+1)²` kernel sampled from the isotropic Gaussian density with
/// `sigma = max(radius / 2, 1)`, normalized to sum to 1.
fn build_kernel(radius: i32) -> Vec<f64> {
    let sigma = (radius as f64 / 2.0).max(1.0);
    let side = (2 * radius + 1) as usize;
    let mut kernel = vec![0.0f64; side * side];
    let mut sum = 0.0f64;
    for i in -radius..=radius {
        for j in -radius..=radius {
            let v = density(j, i, sigma);
            kernel[(i + radius) as usize * side + (j + radius) as usize] = v;
            sum += v;
        }
    }
    // Normalization corrects for the finite window sampling an unbounded
    // density.
    for cell in &mut kernel {
        *cell /= sum;
    }
    kernel
}

#[inline]
fn density(x: i32, y: i32, sigma: f64) -> f64 {
    let two_sigma_sq = 2.0 * sigma * sigma;
    (1.0 / (std::f64::consts::PI * two_sigma_sq))
        * (-((x * x + y * y) as f64) / two_sigma_sq).exp()
}
