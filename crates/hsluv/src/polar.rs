//! LCh(uv) <-> HSLuv / HPLuv.
//!
//! Both spaces keep lightness and hue from LCh and rescale chroma into a
//! 0..100 saturation:
//!
//! - **HSLuv** divides by the per-hue gamut limit, so every sRGB color has
//!   `s` in [0, 100] and `s = 100` is always the most saturated in-gamut color.
//! - **HPLuv** divides by the hue-independent safe limit. Equal `s` means
//!   equal chroma at a given lightness, but saturated sRGB colors land above
//!   100. Those values are returned as-is.
//!
//! # Triplet layout
//!
//! | Space | x | y | z |
//! |-------|---|---|---|
//! | LCh | L | C | H |
//! | HSLuv / HPLuv | H | S | L |
//!
//! Lightness within [`LIGHTNESS_EPSILON`] of 0 or 100 is treated as pure
//! black or white with hue and saturation 0.

use crate::bounds::{max_chroma_for_lh, max_safe_chroma_for_l};
use crate::luv::CHROMA_EPSILON;
use hsluv_math::Vec3;

/// Distance from 0 and 100 within which lightness snaps to black / white.
///
/// Kept well under the 1e-9 round-trip budget: a snapped color may sit up to
/// this far from pure black or white in lightness.
pub const LIGHTNESS_EPSILON: f64 = 1e-11;

#[inline]
fn is_white(l: f64) -> bool {
    l > 100.0 - LIGHTNESS_EPSILON
}

#[inline]
fn is_black(l: f64) -> bool {
    l < LIGHTNESS_EPSILON
}

fn lch_to_polar(lch: Vec3, max_chroma: impl Fn(f64, f64) -> f64) -> Vec3 {
    let (l, c, h) = (lch.x, lch.y, lch.z);
    if is_white(l) {
        return Vec3::new(0.0, 0.0, 100.0);
    }
    if is_black(l) {
        return Vec3::ZERO;
    }
    let max = max_chroma(l, h);
    let s = if max > CHROMA_EPSILON { c / max * 100.0 } else { 0.0 };
    Vec3::new(h, s, l)
}

fn polar_to_lch(hsl: Vec3, max_chroma: impl Fn(f64, f64) -> f64) -> Vec3 {
    let (h, s, l) = (hsl.x, hsl.y, hsl.z);
    if is_white(l) {
        return Vec3::new(100.0, 0.0, h);
    }
    if is_black(l) {
        return Vec3::new(0.0, 0.0, h);
    }
    Vec3::new(l, max_chroma(l, h) / 100.0 * s, h)
}

/// LCh(uv) to HSLuv.
pub fn lch_to_hsluv(lch: Vec3) -> Vec3 {
    lch_to_polar(lch, max_chroma_for_lh)
}

/// HSLuv to LCh(uv).
pub fn hsluv_to_lch(hsluv: Vec3) -> Vec3 {
    polar_to_lch(hsluv, max_chroma_for_lh)
}

/// LCh(uv) to HPLuv. Saturation may fall outside [0, 100].
pub fn lch_to_hpluv(lch: Vec3) -> Vec3 {
    lch_to_polar(lch, |l, _| max_safe_chroma_for_l(l))
}

/// HPLuv to LCh(uv).
pub fn hpluv_to_lch(hpluv: Vec3) -> Vec3 {
    polar_to_lch(hpluv, |l, _| max_safe_chroma_for_l(l))
}
