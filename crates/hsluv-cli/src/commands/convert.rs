//! The four single-color conversions.

use anyhow::Result;
use tracing::{debug, info, trace};

use super::{Output, ensure_finite};
use hsluv::{Hpluv, hpluv_to_rgb, hsluv_to_rgb, rgb_to_hpluv, rgb_to_hsluv};

/// Which conversion to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HsluvToRgb,
    RgbToHsluv,
    HpluvToRgb,
    RgbToHpluv,
}

impl Direction {
    /// Component names of the input triplet, for error messages.
    pub fn input_names(self) -> [&'static str; 3] {
        match self {
            Self::HsluvToRgb | Self::HpluvToRgb => ["h", "s", "l"],
            Self::RgbToHsluv | Self::RgbToHpluv => ["r", "g", "b"],
        }
    }

    fn outputs_rgb(self) -> bool {
        matches!(self, Self::HsluvToRgb | Self::HpluvToRgb)
    }
}

/// Validates `input` and runs the conversion. With `clamp`, HPLuv
/// saturation is clamped into [0, 100]; other directions ignore it.
pub fn convert(direction: Direction, input: (f64, f64, f64), clamp: bool) -> Result<(f64, f64, f64)> {
    ensure_finite(direction.input_names(), input)?;
    let (a, b, c) = input;

    let result = match direction {
        Direction::HsluvToRgb => hsluv_to_rgb(a, b, c),
        Direction::RgbToHsluv => rgb_to_hsluv(a, b, c),
        Direction::HpluvToRgb => hpluv_to_rgb(a, b, c),
        Direction::RgbToHpluv => {
            let hpl = Hpluv::from(rgb_to_hpluv(a, b, c));
            if !hpl.is_representable() {
                debug!(s = hpl.s, clamp, "Color lies outside the HPLuv gamut");
            }
            let hpl = if clamp { hpl.clamp_saturation() } else { hpl };
            <(f64, f64, f64)>::from(hpl)
        }
    };

    if direction.outputs_rgb() {
        let (r, g, b) = result;
        if [r, g, b].iter().any(|v| !(-1e-9..=1.0 + 1e-9).contains(v)) {
            debug!(r, g, b, "Result lies outside sRGB, not clamped");
        }
    }
    Ok(result)
}

pub fn run(direction: Direction, input: (f64, f64, f64), clamp: bool, out: &Output) -> Result<()> {
    trace!(?direction, ?input, clamp, "convert::run");
    let result = convert(direction, input, clamp)?;
    info!(?direction, ?input, ?result, "Converted");
    println!("{}", out.triplet(result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn test_directions() {
        let hsl = convert(Direction::RgbToHsluv, (1.0, 0.0, 0.0), false).unwrap();
        assert!(close(hsl, (12.177050630061776, 100.0, 53.23711559542933)));
        let rgb = convert(Direction::HsluvToRgb, hsl, false).unwrap();
        assert!(close(rgb, (1.0, 0.0, 0.0)));

        let hpl = convert(Direction::RgbToHpluv, (0.2, 0.4, 0.8), false).unwrap();
        let rgb = convert(Direction::HpluvToRgb, hpl, false).unwrap();
        assert!(close(rgb, (0.2, 0.4, 0.8)));
    }

    #[test]
    fn test_clamp() {
        let (h, s, l) = convert(Direction::RgbToHpluv, (1.0, 0.0, 0.0), false).unwrap();
        assert!(s > 100.0);
        let clamped = convert(Direction::RgbToHpluv, (1.0, 0.0, 0.0), true).unwrap();
        assert_eq!(clamped, (h, 100.0, l));

        // Clamp has no effect elsewhere
        let a = convert(Direction::RgbToHsluv, (1.0, 0.0, 0.0), true).unwrap();
        let b = convert(Direction::RgbToHsluv, (1.0, 0.0, 0.0), false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(convert(Direction::HsluvToRgb, (f64::NAN, 50.0, 50.0), false).is_err());
        assert!(convert(Direction::RgbToHpluv, (0.0, f64::NEG_INFINITY, 0.0), true).is_err());
    }

    #[test]
    fn test_out_of_gamut_passes_through() {
        let (r, g, b) = convert(Direction::HsluvToRgb, (12.0, 150.0, 50.0), false).unwrap();
        assert!(r > 1.0 || g < 0.0 || b < 0.0);
    }
}
