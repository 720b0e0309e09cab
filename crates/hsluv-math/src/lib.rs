//! # hsluv-math
//!
//! Math primitives for the HSLuv conversion engine.
//!
//! - [`Vec3`] - 3-component `f64` vectors for RGB/XYZ/LUV triplets
//! - [`Mat3`] - 3x3 matrices for the linear RGB <-> XYZ transform
//! - [`Line`] - slope/intercept lines bounding the sRGB gamut in the u-v plane
//!
//! # Design
//!
//! Everything is `Copy`, stack-only and double precision. All matrix
//! operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use hsluv_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.41239079926595, 0.35758433938387, 0.18048078840183],
//!     [0.21263900587151, 0.71516867876775, 0.072192315360733],
//!     [0.019330818715591, 0.11919477979462, 0.95053215224966],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! assert!(xyz.is_finite());
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - `DMat3` determinant, inverse and products behind [`Mat3`]
//!
//! # Used By
//!
//! - `hsluv-primaries` - RGB/XYZ matrix derivation
//! - `hsluv` - conversion pipeline and gamut bounds

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod line;
mod mat3;
mod vec3;

pub use line::*;
pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::DMat3;
}
