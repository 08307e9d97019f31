//! SVG scatter figure export via Plotters.
//!
//! Why SVG rather than a bitmap? The SVG backend emits text as plain
//! `<text>` elements, so no font or image-codec system dependencies are
//! needed (see the feature selection in `Cargo.toml`).

use std::path::Path;

use plotters::prelude::*;

use crate::error::AppError;

/// Write a scatter of `(inclination_deg, likelihood)` points to an SVG file.
///
/// Axes are fixed to the model's domain: inclination on `[0, 90]` degrees,
/// likelihood on `[0, 1]`.
pub fn write_scatter_svg(
    path: &Path,
    points: &[(f64, f64)],
    width: u32,
    height: u32,
) -> Result<(), AppError> {
    let ctx = |e: &dyn std::fmt::Display| {
        AppError::new(2, format!("Failed to render SVG '{}': {e}", path.display()))
    };

    let root = SVGBackend::new(path, (width.max(100), height.max(100))).into_drawing_area();
    root.fill(&WHITE).map_err(|e| ctx(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Polarization-constrained likelihood", ("sans-serif", 20))
        .set_label_area_size(LabelAreaPosition::Left, 45)
        .set_label_area_size(LabelAreaPosition::Bottom, 35)
        .build_cartesian_2d(0.0..90.0, 0.0..1.0)
        .map_err(|e| ctx(&e))?;

    chart
        .configure_mesh()
        .x_desc("inclination angle (deg)")
        .y_desc("likelihood")
        .x_labels(10)
        .y_labels(5)
        .label_style(("sans-serif", 12))
        .draw()
        .map_err(|e| ctx(&e))?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(|e| ctx(&e))?;

    root.present().map_err(|e| ctx(&e))?;
    Ok(())
}
