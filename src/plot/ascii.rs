//! ASCII scatter plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Axes are fixed to the model's domain: inclination on `[0, 90]` degrees,
//! likelihood on `[0, 1]`. Points above the diagnostic threshold render as
//! `+`, the rest as `o`.

use crate::eval::HIGH_INCLINATION_DEG;

const DELTA_MIN: f64 = 0.0;
const DELTA_MAX: f64 = 90.0;
const LIKE_MIN: f64 = 0.0;
const LIKE_MAX: f64 = 1.0;

/// Render a scatter of `(inclination_deg, likelihood)` points.
pub fn render_scatter(points: &[(f64, f64)], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut grid = vec![vec![' '; width]; height];

    for &(delta, likelihood) in points {
        let x = map_x(delta, width);
        let y = map_y(likelihood, height);
        grid[y][x] = if delta > HIGH_INCLINATION_DEG { '+' } else { 'o' };
    }

    // Build final string. We include a small header with ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: inclination=[{DELTA_MIN:.0}, {DELTA_MAX:.0}] deg | likelihood=[{LIKE_MIN:.0}, {LIKE_MAX:.0}]\n"
    ));

    for row in grid {
        out.push('|');
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out.push('+');
    out.push_str(&"-".repeat(width));
    out.push('\n');

    out
}

fn map_x(delta: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((delta - DELTA_MIN) / (DELTA_MAX - DELTA_MIN)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(likelihood: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((likelihood - LIKE_MIN) / (LIKE_MAX - LIKE_MIN)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}
