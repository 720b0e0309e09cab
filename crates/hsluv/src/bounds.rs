//! sRGB gamut boundary in the u-v plane.
//!
//! At a fixed lightness `L` the colors that stay inside the sRGB cube form a
//! convex hexagon around the achromatic point. Each edge is where one linear
//! channel hits 0 or 1. Substituting the LUV -> XYZ inverse into a row
//! `(m1, m2, m3)` of [`XYZ_TO_SRGB`] and solving `channel = t` for v gives
//! a straight line in u:
//!
//! ```text
//! sub1   = (L + 16)^3 / 1560896          (= Y for L > 8)
//! sub2   = sub1 if sub1 > EPSILON else L / KAPPA
//! top1   = (284517 m1 - 94839 m3) sub2
//! top2   = (838422 m3 + 769860 m2 + 731718 m1) L sub2 - 769860 t L
//! bottom = (632260 m3 - 126452 m2) sub2 + 126452 t
//! line   = (top1 / bottom, top2 / bottom)
//! ```
//!
//! # Chroma limits
//!
//! - [`max_chroma_for_lh`]: shortest ray from the origin at hue `H` that hits
//!   an edge. The exact per-hue gamut limit, used by HSLuv.
//! - [`max_safe_chroma_for_l`]: shortest perpendicular distance to an edge,
//!   the radius of the largest circle inside the hexagon. Valid for every
//!   hue at once, used by HPLuv.
//!
//! A boundary can go vertical at one isolated lightness (`bottom = 0`),
//! which yields a non-finite line. Such a line never wins the minimum below.

use crate::luv::{EPSILON, KAPPA};
use hsluv_math::Line;
use hsluv_primaries::XYZ_TO_SRGB;

/// The six boundary lines at lightness `l`.
///
/// Ordered R, G, B, with the `channel = 0` edge before the `channel = 1`
/// edge for each channel.
///
/// ```rust
/// use hsluv::bounds::get_bounds;
///
/// let lines = get_bounds(50.0);
/// assert_eq!(lines.len(), 6);
/// assert!(lines.iter().all(|l| l.slope.is_finite()));
/// ```
pub fn get_bounds(l: f64) -> [Line; 6] {
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut lines = [Line::default(); 6];
    for (channel, row) in XYZ_TO_SRGB.m.iter().enumerate() {
        let [m1, m2, m3] = *row;
        for t in 0..2 {
            let t = t as f64;
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2
                - 769_860.0 * t * l;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * t;
            lines[channel * 2 + t as usize] = Line::new(top1 / bottom, top2 / bottom);
        }
    }
    lines
}

/// Largest chroma at lightness `l` that is in gamut for every hue.
pub fn max_safe_chroma_for_l(l: f64) -> f64 {
    get_bounds(l)
        .iter()
        .map(Line::distance_from_origin)
        .fold(f64::INFINITY, f64::min)
}

/// Largest in-gamut chroma at lightness `l` and hue `h` (degrees).
///
/// Returns 0 when no edge is hit, which only happens outside (0, 100).
pub fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    let theta = h.to_radians();
    let min = get_bounds(l)
        .iter()
        .filter_map(|line| line.ray_length(theta))
        .fold(f64::INFINITY, f64::min);
    if min.is_finite() { min } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::luv::{lch_to_luv, luv_to_xyz};
    use approx::assert_abs_diff_eq;
    use hsluv_math::Vec3;

    fn linear_rgb_at(l: f64, c: f64, h: f64) -> Vec3 {
        XYZ_TO_SRGB * luv_to_xyz(lch_to_luv(Vec3::new(l, c, h)))
    }

    #[test]
    fn test_boundary_touches_cube_face() {
        // Walking out to the limit puts at least one linear channel on 0 or 1
        for &l in &[5.0, 20.0, 50.0, 75.0, 95.0] {
            for i in 0..36 {
                let h = i as f64 * 10.0;
                let rgb = linear_rgb_at(l, max_chroma_for_lh(l, h), h);
                let on_face = (0..3).any(|k| rgb[k].abs() < 1e-9 || (rgb[k] - 1.0).abs() < 1e-9);
                assert!(on_face, "l={} h={} rgb={:?}", l, h, rgb);
                for k in 0..3 {
                    assert!(rgb[k] > -1e-9 && rgb[k] < 1.0 + 1e-9, "l={} h={} rgb={:?}", l, h, rgb);
                }
            }
        }
    }

    #[test]
    fn test_safe_chroma_is_lower_bound() {
        for i in 1..100 {
            let l = i as f64;
            let safe = max_safe_chroma_for_l(l);
            for j in 0..72 {
                let h = j as f64 * 5.0;
                assert!(safe <= max_chroma_for_lh(l, h) + 1e-9, "l={} h={}", l, h);
            }
            let inside = linear_rgb_at(l, safe, 123.0);
            for k in 0..3 {
                assert!(inside[k] > -1e-9 && inside[k] < 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_red_is_on_boundary() {
        // Pure red (#ff0000) sits exactly at the hue limit
        let (l, c, h) = (53.23711559542933, 179.0380969236203, 12.177050630061776);
        assert_abs_diff_eq!(max_chroma_for_lh(l, h), c, epsilon = 1e-9);
        assert!(max_safe_chroma_for_l(l) < c);
    }

    #[test]
    fn test_extremes_collapse() {
        assert_eq!(max_chroma_for_lh(0.0, 120.0), 0.0);
        assert!(max_chroma_for_lh(100.0, 120.0) < 1e-6);
        assert!(max_safe_chroma_for_l(100.0) < 1e-6);
    }

    #[test]
    fn test_bounds_are_finite_in_range() {
        for i in 1..1000 {
            let l = i as f64 / 10.0;
            assert!(max_safe_chroma_for_l(l).is_finite());
            for j in 0..12 {
                let c = max_chroma_for_lh(l, j as f64 * 30.0);
                assert!(c.is_finite() && c > 0.0, "l={} c={}", l, c);
            }
        }
    }
}
