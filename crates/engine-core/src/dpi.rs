//! Minimal density helpers used to turn authored density-independent units into
//! device pixels.
//!
//! This module does not read any platform state; callers pass the density
//! (device pixels per dp) explicitly.

/// Replace a non-finite or non-positive density with 1.0.
#[inline]
pub fn sanitize_density(density: f32) -> f32 {
    if density.is_finite() && density > 0.0 {
        density
    } else {
        1.0
    }
}

/// Convert density-independent units to whole device pixels, rounding half up.
#[inline]
pub fn dp_to_px(dp: f32, density: f32) -> f32 {
    (dp * sanitize_density(density) + 0.5).floor()
}
