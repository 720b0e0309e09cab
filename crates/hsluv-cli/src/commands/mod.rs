//! CLI command implementations

pub mod convert;
pub mod table;

use anyhow::{Context, Result, bail};

/// Output settings shared by all commands.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Emit JSON instead of text.
    pub json: bool,
    /// Decimal places for text output.
    pub precision: usize,
}

impl Output {
    /// Formats one triplet: `a b c` as text or `[a,b,c]` as JSON.
    pub fn triplet(&self, t: (f64, f64, f64)) -> Result<String> {
        if self.json {
            serde_json::to_string(&[t.0, t.1, t.2]).context("Failed to encode JSON")
        } else {
            let p = self.precision;
            Ok(format!("{:.p$} {:.p$} {:.p$}", t.0, t.1, t.2))
        }
    }
}

/// Rejects NaN and infinite arguments, naming the offending component.
pub fn ensure_finite(names: [&str; 3], values: (f64, f64, f64)) -> Result<()> {
    for (name, v) in names.into_iter().zip([values.0, values.1, values.2]) {
        if !v.is_finite() {
            bail!("{} must be a finite number, got {}", name, v);
        }
    }
    Ok(())
}
