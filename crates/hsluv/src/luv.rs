//! CIE XYZ <-> CIELUV <-> LCh(uv).
//!
//! LUV is anchored at the D65 reference white `(REF_U, REF_V)`; LCh(uv) is its
//! cylindrical form with hue in degrees.
//!
//! # Triplet layout
//!
//! | Space | x | y | z |
//! |-------|---|---|---|
//! | LUV | L | u | v |
//! | LCh | L | C | H |

use hsluv_math::Vec3;
use hsluv_primaries::{REF_U, REF_V, REF_Y};

/// (29/3)^3, slope of the linear segment of CIE lightness.
pub const KAPPA: f64 = 903.2962962;

/// (6/29)^3, relative luminance where CIE lightness switches to the cube root.
pub const EPSILON: f64 = 0.0088564516;

/// Chroma below which hue is undefined and reported as 0.
///
/// Matrix rounding leaves sRGB grays with chroma around 1e-12, so the cut
/// sits just above that noise.
pub const CHROMA_EPSILON: f64 = 1e-11;

/// CIE lightness L* (0..100) from relative luminance Y.
///
/// ```rust
/// use hsluv::luv::y_to_l;
///
/// assert_eq!(y_to_l(0.0), 0.0);
/// assert!((y_to_l(1.0) - 100.0).abs() < 1e-12);
/// ```
#[inline]
pub fn y_to_l(y: f64) -> f64 {
    let ratio = y / REF_Y;
    if ratio <= EPSILON {
        ratio * KAPPA
    } else {
        116.0 * ratio.cbrt() - 16.0
    }
}

/// Relative luminance Y from CIE lightness L*.
#[inline]
pub fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        REF_Y * l / KAPPA
    } else {
        REF_Y * ((l + 16.0) / 116.0).powi(3)
    }
}

/// CIE 1976 (u', v') chromaticity of an XYZ triplet.
///
/// Returns `(0, 0)` when `X + 15Y + 3Z` is zero (black).
#[inline]
pub fn uv_prime(xyz: Vec3) -> (f64, f64) {
    let divider = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if divider == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * xyz.x / divider, 9.0 * xyz.y / divider)
    }
}

/// XYZ to CIELUV.
///
/// ```rust
/// use hsluv::{xyz_to_luv, Vec3};
///
/// assert_eq!(xyz_to_luv(Vec3::ZERO), Vec3::ZERO);
/// ```
pub fn xyz_to_luv(xyz: Vec3) -> Vec3 {
    let (var_u, var_v) = uv_prime(xyz);
    let l = y_to_l(xyz.y);
    if l == 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(
        l,
        13.0 * l * (var_u - REF_U),
        13.0 * l * (var_v - REF_V),
    )
}

/// CIELUV to XYZ.
///
/// `L = 0` is black regardless of u and v. A chromaticity with `v' = 0`
/// lies at infinity and collapses to the achromatic axis.
pub fn luv_to_xyz(luv: Vec3) -> Vec3 {
    let l = luv.x;
    if l == 0.0 {
        return Vec3::ZERO;
    }

    let var_u = luv.y / (13.0 * l) + REF_U;
    let var_v = luv.z / (13.0 * l) + REF_V;
    let y = l_to_y(l);
    if var_v == 0.0 {
        return Vec3::new(0.0, y, 0.0);
    }

    // Written without the (u' - 4) v' - u' v' denominator, which cancels for large u'
    let x = 9.0 * y * var_u / (4.0 * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);
    Vec3::new(x, y, z)
}

/// Wraps an angle in degrees into [0, 360).
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -tiny + 360 rounds up to 360
    if h >= 360.0 { 0.0 } else { h }
}

/// CIELUV to LCh(uv). Hue is in degrees within [0, 360).
pub fn luv_to_lch(luv: Vec3) -> Vec3 {
    let (l, u, v) = (luv.x, luv.y, luv.z);
    let c = u.hypot(v);
    let h = if c < CHROMA_EPSILON {
        0.0
    } else {
        normalize_hue(v.atan2(u).to_degrees())
    };
    Vec3::new(l, c, h)
}

/// LCh(uv) to CIELUV. Any finite hue is accepted.
pub fn lch_to_luv(lch: Vec3) -> Vec3 {
    let (sin, cos) = lch.z.to_radians().sin_cos();
    Vec3::new(lch.x, cos * lch.y, sin * lch.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lightness_roundtrip() {
        for i in 0..=1000 {
            let l = i as f64 / 10.0;
            // The rounded KAPPA/EPSILON pair leaves a ~1e-9 seam at L = 8
            assert_abs_diff_eq!(y_to_l(l_to_y(l)), l, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_lightness_segments_meet() {
        // Both segments agree at the luminance breakpoint
        let linear = EPSILON * KAPPA;
        let cubic = 116.0 * EPSILON.cbrt() - 16.0;
        assert_abs_diff_eq!(linear, cubic, epsilon = 1e-5);
        assert_abs_diff_eq!(linear, 8.0, epsilon = 1e-5);
    }

    #[test]
    fn test_xyz_to_luv_red() {
        let red = hsluv_primaries::SRGB_TO_XYZ.col(0);
        let luv = xyz_to_luv(red);
        assert_abs_diff_eq!(luv.x, 53.23711559542933, epsilon = 1e-10);
        assert_abs_diff_eq!(luv.y, 175.00982216288384, epsilon = 1e-10);
        assert_abs_diff_eq!(luv.z, 37.7650936255616, epsilon = 1e-10);
    }

    #[test]
    fn test_white_is_achromatic() {
        let white = hsluv_primaries::SRGB_TO_XYZ * Vec3::ONE;
        let lch = luv_to_lch(xyz_to_luv(white));
        assert_abs_diff_eq!(lch.x, 100.0, epsilon = 1e-9);
        assert!(lch.y < 1e-10);
        // Hue of near-zero chroma is noise; the polar layer snaps white anyway
        assert_eq!(crate::polar::lch_to_hsluv(lch), Vec3::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn test_zero_divider_guard() {
        // X + 15Y + 3Z == 0 but Y != 0
        let xyz = Vec3::new(15.0, -1.0, 0.0);
        let luv = xyz_to_luv(xyz);
        assert!(luv.is_finite());
    }

    #[test]
    fn test_luv_xyz_roundtrip() {
        let xyz = Vec3::new(0.17014296630873593, 0.1456543202990507, 0.5904344525598408);
        let back = luv_to_xyz(xyz_to_luv(xyz));
        assert!(back.max_abs_diff(xyz) < 1e-11);
        assert_eq!(luv_to_xyz(Vec3::new(0.0, 12.0, -5.0)), Vec3::ZERO);
    }

    #[test]
    fn test_luv_to_xyz_zero_v_prime() {
        // v' lands on (or within an ulp of) zero
        let l = 50.0;
        let luv = Vec3::new(l, 0.0, -REF_V * 13.0 * l);
        assert!(luv_to_xyz(luv).is_finite());
    }

    #[test]
    fn test_luv_to_xyz_huge_u() {
        for u in [1e20, 1e300, -1e300] {
            for l in [1e-9, 50.0, 99.0] {
                let xyz = luv_to_xyz(Vec3::new(l, u, 0.0));
                assert!(xyz.is_finite(), "L={l} u={u} -> {xyz:?}");
            }
        }
        // Agrees with the textbook form where that one is well conditioned
        let luv = Vec3::new(60.0, 40.0, -25.0);
        let var_u = luv.y / (13.0 * luv.x) + REF_U;
        let var_v = luv.z / (13.0 * luv.x) + REF_V;
        let y = l_to_y(luv.x);
        let textbook = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
        assert_abs_diff_eq!(luv_to_xyz(luv).x, textbook, epsilon = 1e-14);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(-1e-15), 0.0);
    }

    #[test]
    fn test_lch_roundtrip() {
        let luv = Vec3::new(45.03314922580453, -19.256763488045266, -88.18104973027758);
        let lch = luv_to_lch(luv);
        assert_abs_diff_eq!(lch.y, 90.25918497066213, epsilon = 1e-10);
        assert_abs_diff_eq!(lch.z, 257.68127843290245, epsilon = 1e-10);
        assert!(lch_to_luv(lch).max_abs_diff(luv) < 1e-12);
    }
}
