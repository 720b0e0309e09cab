//! Integration tests for the hsluv crates.
//!
//! This crate owns the conformance corpus (`data/snapshot.json`) and the
//! loader for it. The tests themselves live under `tests/`:
//!
//! - `conformance.rs` - every stage of every snapshot color
//! - `properties.rs` - round-trip, range and totality sweeps
//!
//! The snapshot is self-generated: it uses the layout of the published
//! HSLuv snapshot files, but its values come from the independent Python
//! implementation in `tests/parity/`, not from the published file. A handful
//! of published rev4 values are checked separately in
//! `conformance.rs::test_published_rev4_values`. Regenerate with:
//!
//! ```bash
//! python tests/parity/generate_snapshot.py
//! ```

mod error;
mod snapshot;

pub use error::{SnapshotError, SnapshotResult};
pub use snapshot::{Snapshot, SnapshotEntry, parse_hex};
