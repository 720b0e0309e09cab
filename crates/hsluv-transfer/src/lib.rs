//! # hsluv-transfer
//!
//! The sRGB transfer function (companding curve) and its inverse.
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!
//! The HSLuv pipeline decodes gamma-encoded sRGB with [`to_linear`] before
//! the XYZ matrix and re-encodes with [`to_gamma`] on the way back.
//!
//! # Usage
//!
//! ```rust
//! use hsluv_transfer::{to_gamma, to_linear};
//!
//! let linear = to_linear(0.5);
//! let encoded = to_gamma(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `hsluv` - RGB <-> XYZ stage

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as to_linear, eotf_rgb, oetf as to_gamma, oetf_rgb};
