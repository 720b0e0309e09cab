//! Gamma-encoded sRGB <-> CIE XYZ.
//!
//! Decodes with the sRGB EOTF, then applies the fixed D65 matrix
//! (and the reverse on the way back). Out-of-range values pass through
//! unclamped.

use hsluv_math::Vec3;
use hsluv_primaries::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use hsluv_transfer::{eotf_rgb, oetf_rgb};

/// Gamma-encoded sRGB to XYZ.
///
/// ```rust
/// use hsluv::{rgb_to_xyz, Vec3};
///
/// let white = rgb_to_xyz(Vec3::ONE);
/// assert!((white.y - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rgb_to_xyz(rgb: Vec3) -> Vec3 {
    SRGB_TO_XYZ * eotf_rgb(rgb)
}

/// XYZ to gamma-encoded sRGB.
#[inline]
pub fn xyz_to_rgb(xyz: Vec3) -> Vec3 {
    oetf_rgb(XYZ_TO_SRGB * xyz)
}
