//! # hsluv-primaries
//!
//! sRGB color primaries, the D65 reference white and the matrices that
//! convert between linear sRGB and CIE XYZ.
//!
//! Two flavors of the same data are provided:
//!
//! - **Published constants** ([`SRGB_TO_XYZ`], [`XYZ_TO_SRGB`], [`REF_U`],
//!   [`REF_V`]) with exactly the digits of the HSLuv reference
//!   implementation. The conversion engine uses these so its output stays
//!   bit-compatible with the published test vectors.
//! - **Derivation** ([`rgb_to_xyz_matrix`], [`Primaries::white_uv`]) from the
//!   CIE xy chromaticities, used to check the constants against first
//!   principles.
//!
//! # Usage
//!
//! ```rust
//! use hsluv_primaries::{SRGB, SRGB_TO_XYZ, rgb_to_xyz_matrix};
//! use hsluv_math::Vec3;
//!
//! let derived = rgb_to_xyz_matrix(&SRGB);
//! assert!(derived.max_abs_diff(&SRGB_TO_XYZ) < 1e-12);
//!
//! // White (1,1,1) maps to Y = 1
//! let white = SRGB_TO_XYZ * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`hsluv-math`] - Matrix operations
//!
//! # Used By
//!
//! - `hsluv` - RGB <-> XYZ and XYZ <-> LUV stages

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use hsluv_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors (R, G, B) and white point,
/// all specified as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }

    /// White point as CIE 1976 (u', v') chromaticity.
    ///
    /// ```rust
    /// use hsluv_primaries::{SRGB, REF_U, REF_V};
    ///
    /// let (u, v) = SRGB.white_uv();
    /// assert!((u - REF_U).abs() < 1e-12);
    /// assert!((v - REF_V).abs() < 1e-12);
    /// ```
    pub fn white_uv(&self) -> (f64, f64) {
        let (x, y) = self.w;
        let denom = -2.0 * x + 12.0 * y + 3.0;
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

// ============================================================================
// White Point
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// Luminance of the reference white.
pub const REF_Y: f64 = 1.0;

/// u' chromaticity of the D65 reference white.
pub const REF_U: f64 = 0.19783000664283;

/// v' chromaticity of the D65 reference white.
pub const REF_V: f64 = 0.46831999493879;

// ============================================================================
// Primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-15 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = primaries.white_xyz();

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // Solve M * S = W for the per-primary scale
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries).inverse().unwrap_or(Mat3::IDENTITY)
}

// ============================================================================
// Published Matrices
// ============================================================================

/// Linear sRGB to XYZ (D65), HSLuv reference digits.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
]);

/// XYZ (D65) to linear sRGB, HSLuv reference digits.
///
/// The gamut boundary lines are derived from the rows of this matrix.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
]);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_published_matrix_matches_derivation() {
        assert!(rgb_to_xyz_matrix(&SRGB).max_abs_diff(&SRGB_TO_XYZ) < 1e-12);
        assert!(xyz_to_rgb_matrix(&SRGB).max_abs_diff(&XYZ_TO_SRGB) < 1e-12);
    }

    #[test]
    fn test_published_matrices_are_inverse() {
        let product = XYZ_TO_SRGB * SRGB_TO_XYZ;
        assert!(product.max_abs_diff(&Mat3::IDENTITY) < 1e-12);
    }

    #[test]
    fn test_white_point() {
        let white = SRGB_TO_XYZ * Vec3::ONE;
        assert_abs_diff_eq!(white.y, REF_Y, epsilon = 1e-12);

        let expected = SRGB.white_xyz();
        assert!(white.max_abs_diff(expected) < 1e-12);
    }

    #[test]
    fn test_white_uv_matches_reference() {
        let (u, v) = SRGB.white_uv();
        assert_abs_diff_eq!(u, REF_U, epsilon = 1e-12);
        assert_abs_diff_eq!(v, REF_V, epsilon = 1e-12);
    }

    #[test]
    fn test_xy_to_xyz_degenerate() {
        assert_eq!(xy_to_xyz(0.3, 0.0), Vec3::ZERO);
        assert_eq!(xy_to_xyz(0.25, 0.5), Vec3::new(0.5, 1.0, 0.5));
    }

    #[test]
    fn test_roundtrip() {
        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = XYZ_TO_SRGB * (SRGB_TO_XYZ * rgb);
        assert!(rgb.max_abs_diff(back) < 1e-12);
    }
}
