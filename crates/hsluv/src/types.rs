//! Typed color triplets.
//!
//! Thin `Copy` wrappers over three `f64` so a value's color space is part of
//! its type. Each converts from/to a plain `(f64, f64, f64)` tuple and to
//! the neighboring stages of the pipeline.
//!
//! ```rust
//! use hsluv::{Hsluv, Rgb};
//!
//! let teal = Hsluv::new(190.0, 80.0, 60.0);
//! let rgb: Rgb = teal.to_rgb();
//! let back = rgb.to_hsluv();
//! assert!((back.s - 80.0).abs() < 1e-9);
//! ```

use crate::convert::{lch_to_rgb, rgb_to_lch};
use crate::luv::{lch_to_luv, luv_to_lch, luv_to_xyz, xyz_to_luv};
use crate::polar::{hpluv_to_lch, hsluv_to_lch, lch_to_hpluv, lch_to_hsluv};
use crate::rgb::{rgb_to_xyz, xyz_to_rgb};
use hsluv_math::Vec3;

macro_rules! triplet {
    ($(#[$meta:meta])* $name:ident { $a:ident, $b:ident, $c:ident }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            #[allow(missing_docs)]
            pub $a: f64,
            #[allow(missing_docs)]
            pub $b: f64,
            #[allow(missing_docs)]
            pub $c: f64,
        }

        impl $name {
            /// Creates a new triplet.
            #[inline]
            pub const fn new($a: f64, $b: f64, $c: f64) -> Self {
                Self { $a, $b, $c }
            }

            /// Creates from an array.
            #[inline]
            pub const fn from_array(a: [f64; 3]) -> Self {
                Self::new(a[0], a[1], a[2])
            }

            /// Converts to an array.
            #[inline]
            pub const fn to_array(self) -> [f64; 3] {
                [self.$a, self.$b, self.$c]
            }

            /// Returns true if all components are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.to_vec3().is_finite()
            }

            #[inline]
            fn to_vec3(self) -> Vec3 {
                Vec3::from_array(self.to_array())
            }

            #[inline]
            fn from_vec3(v: Vec3) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<(f64, f64, f64)> for $name {
            #[inline]
            fn from(($a, $b, $c): (f64, f64, f64)) -> Self {
                Self::new($a, $b, $c)
            }
        }

        impl From<$name> for (f64, f64, f64) {
            #[inline]
            fn from(t: $name) -> (f64, f64, f64) {
                (t.$a, t.$b, t.$c)
            }
        }

        impl From<[f64; 3]> for $name {
            #[inline]
            fn from(a: [f64; 3]) -> Self {
                Self::from_array(a)
            }
        }
    };
}

triplet! {
    /// Gamma-encoded sRGB, nominally in [0, 1].
    Rgb { r, g, b }
}

triplet! {
    /// CIE XYZ relative to the D65 white (Y = 1).
    Xyz { x, y, z }
}

triplet! {
    /// CIELUV: lightness 0..100 and chromaticity u, v.
    Luv { l, u, v }
}

triplet! {
    /// Cylindrical CIELUV: lightness, chroma and hue in degrees.
    Lch { l, c, h }
}

triplet! {
    /// HSLuv: hue in degrees, saturation and lightness in 0..100.
    Hsluv { h, s, l }
}

triplet! {
    /// HPLuv: hue in degrees, saturation and lightness in 0..100.
    ///
    /// Saturation above 100 (or below 0) marks a color outside the
    /// HPLuv sub-gamut.
    Hpluv { h, s, l }
}

impl Rgb {
    /// Converts to CIE XYZ.
    pub fn to_xyz(self) -> Xyz {
        Xyz::from_vec3(rgb_to_xyz(self.to_vec3()))
    }

    /// Converts to LCh(uv).
    pub fn to_lch(self) -> Lch {
        Lch::from_vec3(rgb_to_lch(self.to_vec3()))
    }

    /// Converts to HSLuv.
    pub fn to_hsluv(self) -> Hsluv {
        self.to_lch().to_hsluv()
    }

    /// Converts to HPLuv.
    pub fn to_hpluv(self) -> Hpluv {
        self.to_lch().to_hpluv()
    }
}

impl Xyz {
    /// Converts to gamma-encoded sRGB.
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_vec3(xyz_to_rgb(self.to_vec3()))
    }

    /// Converts to CIELUV.
    pub fn to_luv(self) -> Luv {
        Luv::from_vec3(xyz_to_luv(self.to_vec3()))
    }
}

impl Luv {
    /// Converts to CIE XYZ.
    pub fn to_xyz(self) -> Xyz {
        Xyz::from_vec3(luv_to_xyz(self.to_vec3()))
    }

    /// Converts to LCh(uv).
    pub fn to_lch(self) -> Lch {
        Lch::from_vec3(luv_to_lch(self.to_vec3()))
    }
}

impl Lch {
    /// Converts to CIELUV.
    pub fn to_luv(self) -> Luv {
        Luv::from_vec3(lch_to_luv(self.to_vec3()))
    }

    /// Converts to gamma-encoded sRGB.
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_vec3(lch_to_rgb(self.to_vec3()))
    }

    /// Converts to HSLuv.
    pub fn to_hsluv(self) -> Hsluv {
        Hsluv::from_vec3(lch_to_hsluv(self.to_vec3()))
    }

    /// Converts to HPLuv.
    pub fn to_hpluv(self) -> Hpluv {
        Hpluv::from_vec3(lch_to_hpluv(self.to_vec3()))
    }
}

impl Hsluv {
    /// Converts to LCh(uv).
    pub fn to_lch(self) -> Lch {
        Lch::from_vec3(hsluv_to_lch(self.to_vec3()))
    }

    /// Converts to gamma-encoded sRGB.
    pub fn to_rgb(self) -> Rgb {
        self.to_lch().to_rgb()
    }
}

impl Hpluv {
    /// Converts to LCh(uv).
    pub fn to_lch(self) -> Lch {
        Lch::from_vec3(hpluv_to_lch(self.to_vec3()))
    }

    /// Converts to gamma-encoded sRGB.
    pub fn to_rgb(self) -> Rgb {
        self.to_lch().to_rgb()
    }

    /// True when saturation is within [0, 100].
    pub fn is_representable(self) -> bool {
        (0.0..=100.0).contains(&self.s)
    }

    /// Clamps saturation into [0, 100], giving the closest HPLuv color with
    /// the same hue and lightness.
    pub fn clamp_saturation(self) -> Self {
        Self::new(self.h, self.s.clamp(0.0, 100.0), self.l)
    }
}
