//! Conformance snapshot: hex color -> expected value at every stage.

use crate::{SnapshotError, SnapshotResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Bundled snapshot, generated by `tests/parity/generate_snapshot.py`.
const BUNDLED: &str = include_str!("../data/snapshot.json");

/// Expected values for one color.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SnapshotEntry {
    /// Gamma-encoded sRGB, 0..1.
    pub rgb: [f64; 3],
    /// CIE XYZ.
    pub xyz: [f64; 3],
    /// CIELUV.
    pub luv: [f64; 3],
    /// LCh(uv), hue in degrees.
    pub lch: [f64; 3],
    /// HSLuv.
    pub hsluv: [f64; 3],
    /// HPLuv.
    pub hpluv: [f64; 3],
}

/// A validated snapshot, ordered by hex key.
#[derive(Debug, Clone)]
pub struct Snapshot {
    entries: BTreeMap<String, SnapshotEntry>,
}

impl Snapshot {
    /// Parses a snapshot from JSON text and validates every key.
    pub fn from_json(json: &str) -> SnapshotResult<Self> {
        let entries: BTreeMap<String, SnapshotEntry> = serde_json::from_str(json)?;
        if entries.is_empty() {
            return Err(SnapshotError::Empty);
        }
        for (key, entry) in &entries {
            let rgb = parse_hex(key)?;
            let matches = rgb
                .iter()
                .zip(entry.rgb.iter())
                .all(|(a, b)| (a - b).abs() < 1e-12);
            if !matches {
                return Err(SnapshotError::RgbMismatch {
                    key: key.clone(),
                    rgb: entry.rgb,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Reads and validates a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> SnapshotResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The snapshot shipped with this crate.
    pub fn bundled() -> SnapshotResult<Self> {
        Self::from_json(BUNDLED)
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no colors (never for a validated snapshot).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up one color by `#rrggbb` key.
    pub fn get(&self, hex: &str) -> Option<&SnapshotEntry> {
        self.entries.get(&hex.to_ascii_lowercase())
    }

    /// Iterates `(hex, entry)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SnapshotEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Parses `#rrggbb` into sRGB components in 0..1.
pub fn parse_hex(hex: &str) -> SnapshotResult<[f64; 3]> {
    let invalid = || SnapshotError::InvalidHex(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let mut rgb = [0.0; 3];
    for (i, c) in rgb.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        *c = byte as f64 / 255.0;
    }
    Ok(rgb)
}
