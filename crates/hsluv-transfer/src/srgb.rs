//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//! Breakpoints and coefficients are the ones the HSLuv reference test
//! vectors were produced with.
//!
//! # Range
//!
//! - Nominal input/output: [0, 1]. Values outside are passed through the
//!   same formula and are never clamped.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use hsluv_math::Vec3;

/// Encoded value at which the EOTF switches from linear to power segment.
pub const EOTF_BREAK: f64 = 0.04045;

/// Linear value at which the OETF switches from linear to power segment.
pub const OETF_BREAK: f64 = 0.0031308;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use hsluv_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= EOTF_BREAK {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= OETF_BREAK {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(eotf)
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: Vec3) -> Vec3 {
    rgb.map(oetf)
}
