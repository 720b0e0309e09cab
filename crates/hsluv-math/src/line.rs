//! Straight lines in the u-v chromaticity plane.
//!
//! At a fixed lightness each sRGB channel bound (channel = 0 or channel = 1)
//! is a straight line `v = slope * u + intercept`. The six of them enclose
//! the hexagon of representable chroma.

/// A line `v = slope * u + intercept`.
///
/// # Example
///
/// ```rust
/// use hsluv_math::Line;
///
/// // Horizontal line v = 2
/// let line = Line::new(0.0, 2.0);
/// assert_eq!(line.distance_from_origin(), 2.0);
/// // Straight up (90 degrees) hits it after 2 units
/// assert!((line.ray_length(std::f64::consts::FRAC_PI_2).unwrap() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Slope (dv/du)
    pub slope: f64,
    /// Value of v where the line crosses u = 0
    pub intercept: f64,
}

impl Line {
    /// Creates a new line.
    #[inline]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Perpendicular distance from the origin to the line.
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.intercept.abs() / (self.slope * self.slope + 1.0).sqrt()
    }

    /// Distance along the ray from the origin at angle `theta` (radians)
    /// to the intersection with this line.
    ///
    /// Returns `None` when the ray points away from the line or runs
    /// parallel to it.
    #[inline]
    pub fn ray_length(&self, theta: f64) -> Option<f64> {
        let (sin, cos) = theta.sin_cos();
        let denom = sin - self.slope * cos;
        if denom == 0.0 {
            return None;
        }
        let length = self.intercept / denom;
        (length >= 0.0).then_some(length)
    }
}
