//! # hsluv
//!
//! Conversions between sRGB and the perceptually uniform HSLuv and HPLuv
//! color spaces.
//!
//! - **HSLuv** rescales CIELUV chroma against the sRGB gamut limit at each
//!   hue and lightness, so saturation 0..100 covers all of sRGB.
//! - **HPLuv** rescales against a hue-independent limit, so equal saturation
//!   means equal chroma, at the cost of not covering all of sRGB.
//!
//! All conversions are pure `f64` arithmetic on stack values: no allocation,
//! no shared state, safe to call from any thread.
//!
//! # Architecture
//!
//! ```text
//!                       hsluv
//!                         |
//!        +----------------+----------------+
//!        |                |                |
//! hsluv-transfer   hsluv-primaries         |
//!        |                |                |
//!        +----------------+----------------+
//!                         |
//!                    hsluv-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use hsluv::{hpluv_to_rgb, hsluv_to_rgb, rgb_to_hpluv, rgb_to_hsluv};
//!
//! let (r, g, b) = hsluv_to_rgb(250.0, 80.0, 45.0);
//! let (h, s, l) = rgb_to_hsluv(r, g, b);
//! assert!((h - 250.0).abs() < 1e-9 && (s - 80.0).abs() < 1e-9 && (l - 45.0).abs() < 1e-9);
//!
//! // HPLuv saturation may exceed 100 for vivid sRGB colors
//! let (_, s, _) = rgb_to_hpluv(1.0, 0.0, 0.0);
//! assert!(s > 100.0);
//! let (r, _, _) = hpluv_to_rgb(12.0, 100.0, 50.0);
//! assert!(r < 1.0);
//! ```
//!
//! # Pipeline Stages
//!
//! | Module | Stage |
//! |--------|-------|
//! | [`rgb`] | gamma sRGB <-> XYZ |
//! | [`luv`] | XYZ <-> CIELUV <-> LCh(uv) |
//! | [`bounds`] | sRGB gamut boundary lines and chroma limits |
//! | [`polar`] | LCh(uv) <-> HSLuv / HPLuv |
//! | [`convert`] | the four end-to-end operations |
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for the typed triplets
//!
//! # Dependencies
//!
//! - [`hsluv-math`] - `Vec3`, `Mat3`, `Line`
//! - [`hsluv-transfer`] - sRGB companding
//! - [`hsluv-primaries`] - sRGB/D65 matrices and white point
//!
//! # Used By
//!
//! - `hsluv-cli` - command-line front end
//! - `hsluv-tests` - conformance and property tests
//! - `hsluv-bench` - benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bounds;
pub mod convert;
pub mod luv;
pub mod polar;
pub mod rgb;
mod types;

pub use convert::{hpluv_to_rgb, hsluv_to_rgb, lch_to_rgb, rgb_to_hpluv, rgb_to_hsluv, rgb_to_lch};
pub use luv::{l_to_y, lch_to_luv, luv_to_lch, luv_to_xyz, xyz_to_luv, y_to_l};
pub use polar::{hpluv_to_lch, hsluv_to_lch, lch_to_hpluv, lch_to_hsluv};
pub use rgb::{rgb_to_xyz, xyz_to_rgb};
pub use types::{Hpluv, Hsluv, Lch, Luv, Rgb, Xyz};

pub use hsluv_math::Vec3;

// Re-export sub-crates for convenience
pub use hsluv_math as math;
pub use hsluv_primaries as primaries;
pub use hsluv_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        Hpluv, Hsluv, Lch, Luv, Rgb, Xyz,
        hpluv_to_rgb, hsluv_to_rgb, rgb_to_hpluv, rgb_to_hsluv,
    };
}
