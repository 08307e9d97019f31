//! Scatter rendering for evaluation results.
//!
//! - terminal ASCII scatter (`ascii`)
//! - SVG figure export via Plotters (`svg`)

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::*;
