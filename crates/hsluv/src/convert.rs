//! End-to-end conversions between gamma-encoded sRGB and HSLuv / HPLuv.
//!
//! Each operation chains the stage functions:
//!
//! ```text
//! RGB -> (EOTF) -> linear RGB -> (M_INV) -> XYZ -> LUV -> LCh -> HSLuv | HPLuv
//! ```
//!
//! and the reverse. None of them clamp: out-of-gamut HSLuv/HPLuv input gives
//! RGB outside [0, 1], and sRGB colors beyond the HPLuv sub-gamut give HPLuv
//! saturation above 100.
//!
//! # Example
//!
//! ```rust
//! use hsluv::{hsluv_to_rgb, rgb_to_hsluv};
//!
//! let (h, s, l) = rgb_to_hsluv(1.0, 0.0, 0.0);
//! assert!((h - 12.177050630061776).abs() < 1e-9);
//! assert!((s - 100.0).abs() < 1e-9);
//! assert!((l - 53.23711559542933).abs() < 1e-9);
//!
//! let (r, g, b) = hsluv_to_rgb(h, s, l);
//! assert!((r - 1.0).abs() < 1e-9 && g.abs() < 1e-9 && b.abs() < 1e-9);
//! ```

use crate::luv::{lch_to_luv, luv_to_lch, luv_to_xyz, xyz_to_luv};
use crate::polar::{hpluv_to_lch, hsluv_to_lch, lch_to_hpluv, lch_to_hsluv};
use crate::rgb::{rgb_to_xyz, xyz_to_rgb};
use hsluv_math::Vec3;

/// Gamma-encoded sRGB to LCh(uv).
#[inline]
pub fn rgb_to_lch(rgb: Vec3) -> Vec3 {
    luv_to_lch(xyz_to_luv(rgb_to_xyz(rgb)))
}

/// LCh(uv) to gamma-encoded sRGB.
#[inline]
pub fn lch_to_rgb(lch: Vec3) -> Vec3 {
    xyz_to_rgb(luv_to_xyz(lch_to_luv(lch)))
}

/// HSLuv `(h, s, l)` to sRGB `(r, g, b)`.
///
/// `h` is in degrees (any finite value; it is periodic), `s` and `l` are
/// nominally in [0, 100]. The result is nominally in [0, 1] and is not
/// clamped.
pub fn hsluv_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    lch_to_rgb(hsluv_to_lch(Vec3::new(h, s, l))).into()
}

/// sRGB `(r, g, b)` to HSLuv `(h, s, l)`.
///
/// For inputs in [0, 1]: `h` in [0, 360), `s` and `l` in [0, 100].
/// Black and white report `h = 0, s = 0`.
pub fn rgb_to_hsluv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    lch_to_hsluv(rgb_to_lch(Vec3::new(r, g, b))).into()
}

/// HPLuv `(h, s, l)` to sRGB `(r, g, b)`.
pub fn hpluv_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    lch_to_rgb(hpluv_to_lch(Vec3::new(h, s, l))).into()
}

/// sRGB `(r, g, b)` to HPLuv `(h, s, l)`.
///
/// HPLuv does not cover the whole sRGB gamut: saturated colors report
/// `s > 100`. Clamp `s` into [0, 100] to get the closest representable
/// HPLuv color.
pub fn rgb_to_hpluv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    lch_to_hpluv(rgb_to_lch(Vec3::new(r, g, b))).into()
}
