//! Grid sweep for eyeballing ranges.
//!
//! `--from rgb` walks the RGB cube and prints HSLuv and HPLuv for every
//! sample. `--from hsluv` / `--from hpluv` walk hue (exclusive of 360),
//! saturation and lightness and print the resulting sRGB.

use anyhow::Result;
use serde_json::json;
use tracing::{debug, trace};

use super::Output;
use crate::{TableArgs, TableSource};
use hsluv::{hpluv_to_rgb, hsluv_to_rgb, rgb_to_hpluv, rgb_to_hsluv};

type Triplet = (f64, f64, f64);

/// One sample and its conversions, labelled by space.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub input: Triplet,
    pub outputs: Vec<(&'static str, Triplet)>,
}

/// Sample points for `from` with `steps` subdivisions per axis.
pub fn samples(from: TableSource, steps: u32) -> Vec<Triplet> {
    let n = steps.max(1);
    let frac = |i: u32| f64::from(i) / f64::from(n);
    let mut out = Vec::new();
    match from {
        TableSource::Rgb => {
            for r in 0..=n {
                for g in 0..=n {
                    for b in 0..=n {
                        out.push((frac(r), frac(g), frac(b)));
                    }
                }
            }
        }
        TableSource::Hsluv | TableSource::Hpluv => {
            for h in 0..n {
                for s in 0..=n {
                    for l in 0..=n {
                        out.push((360.0 * frac(h), 100.0 * frac(s), 100.0 * frac(l)));
                    }
                }
            }
        }
    }
    out
}

fn row(from: TableSource, input: Triplet) -> Row {
    let (a, b, c) = input;
    let outputs = match from {
        TableSource::Rgb => vec![("hsluv", rgb_to_hsluv(a, b, c)), ("hpluv", rgb_to_hpluv(a, b, c))],
        TableSource::Hsluv => vec![("rgb", hsluv_to_rgb(a, b, c))],
        TableSource::Hpluv => vec![("rgb", hpluv_to_rgb(a, b, c))],
    };
    Row { input, outputs }
}

/// Builds every row of the sweep.
pub fn rows(from: TableSource, steps: u32) -> Vec<Row> {
    samples(from, steps).into_iter().map(|s| row(from, s)).collect()
}

fn source_name(from: TableSource) -> &'static str {
    match from {
        TableSource::Rgb => "rgb",
        TableSource::Hsluv => "hsluv",
        TableSource::Hpluv => "hpluv",
    }
}

/// Renders one row as a text line or a JSON object.
pub fn render(from: TableSource, row: &Row, out: &Output) -> Result<String> {
    if out.json {
        let mut obj = serde_json::Map::new();
        let arr = |t: Triplet| json!([t.0, t.1, t.2]);
        obj.insert(source_name(from).to_string(), arr(row.input));
        for (name, t) in &row.outputs {
            obj.insert(name.to_string(), arr(*t));
        }
        return Ok(serde_json::Value::Object(obj).to_string());
    }

    let mut line = format!("{} {}", source_name(from), out.triplet(row.input)?);
    for (name, t) in &row.outputs {
        line.push_str(&format!("  {} {}", name, out.triplet(*t)?));
    }
    Ok(line)
}

pub fn run(args: &TableArgs, out: &Output) -> Result<()> {
    trace!(from = ?args.from, steps = args.steps, "table::run");
    let rows = rows(args.from, args.steps);
    debug!(count = rows.len(), "Rendering table");
    for row in &rows {
        println!("{}", render(args.from, row, out)?);
    }
    Ok(())
}
