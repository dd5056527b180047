//! Shared numeric helpers for the convolution filters.

/// Mirror an out-of-range sample index back into `[0, max_index)`.
///
/// Exact reflection about the boundary: position −1 reads position 0,
/// position −2 reads position 1, position `N` reads position `N−1`. Indices
/// still out of range after one reflection (kernel radius larger than the
/// axis) are clamped.
#[inline]
pub fn reflect_index(index: isize, max_index: usize) -> usize {
    if max_index == 0 {
        return 0;
    }
    let max = max_index as isize;
    let reflected = if index < 0 {
        -index - 1
    } else if index >= max {
        2 * max - index - 1
    } else {
        index
    };
    reflected.clamp(0, max - 1) as usize
}

/// Affine range remap with output clamping.
///
/// Maps `val` from `[in_min, in_max]` onto `[out_min, out_max]`; results are
/// clamped into the output range even for inputs outside the input range.
#[inline]
pub fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    ((val - in_min) * (out_max - out_min) / (in_max - in_min) + out_min).clamp(out_min, out_max)
}
