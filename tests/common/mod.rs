use bmp_filters::{Image, ImageRgb, Rgb};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

/// Generates an image with every pixel set to the same color.
pub fn uniform_rgb(width: usize, height: usize, color: Rgb) -> ImageRgb {
    Image::from_vec(width, height, vec![color; width * height])
}

/// Generates a deterministic color gradient, distinct at every pixel of small
/// images, for exact round-trip comparisons.
pub fn gradient_rgb(width: usize, height: usize) -> ImageRgb {
    let mut img = ImageRgb::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(
                x,
                y,
                Rgb::new(
                    (x * 40 % 256) as u8,
                    (y * 60 % 256) as u8,
                    ((x + y) * 25 % 256) as u8,
                ),
            );
        }
    }
    img
}

/// Unique scratch file path under the system temp directory.
pub fn scratch_path(label: &str) -> PathBuf {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "bmp-filters-test-{}-{}-{}.bmp",
        std::process::id(),
        label,
        n
    ))
}

/// Removes the scratch file at the end of a test, ignoring missing files.
pub struct ScratchFile(pub PathBuf);

impl ScratchFile {
    pub fn new(label: &str) -> Self {
        Self(scratch_path(label))
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}
