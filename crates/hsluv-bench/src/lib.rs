//! Benchmark inputs for hsluv.
//!
//! Run with: `cargo bench -p hsluv-bench`

/// `n` evenly spread sRGB colors covering the unit cube.
pub fn rgb_samples(n: usize) -> Vec<(f64, f64, f64)> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n.max(1) as f64;
            (t, (t * 7.0).fract(), (t * 31.0).fract())
        })
        .collect()
}

/// `n` HSLuv colors sweeping hue, saturation and lightness.
pub fn hsluv_samples(n: usize) -> Vec<(f64, f64, f64)> {
    rgb_samples(n)
        .into_iter()
        .map(|(a, b, c)| (a * 360.0, b * 100.0, c * 100.0))
        .collect()
}
