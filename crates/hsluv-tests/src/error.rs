//! Error types for loading the conformance snapshot.

use thiserror::Error;

/// Snapshot loading error.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot is not valid JSON or has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Key is not a `#rrggbb` color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Key and `rgb` column disagree.
    #[error("{key}: rgb column {rgb:?} does not match the key")]
    RgbMismatch {
        /// Hex key of the entry.
        key: String,
        /// Value found in the `rgb` column.
        rgb: [f64; 3],
    },

    /// Snapshot has no entries.
    #[error("snapshot is empty")]
    Empty,
}

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
