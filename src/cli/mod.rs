//! Command-line parsing for the polarization likelihood tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/evaluation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_SIGMA, SampleMode};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "relicpol",
    version,
    about = "Radio-relic polarization likelihood weighting for merger geometries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate the polarization likelihood over a sample batch, weight by
    /// priors, and print a summary/plot with optional exports.
    Eval(EvalArgs),
    /// Generate synthetic prior/angle sample arrays.
    Sample(SampleArgs),
    /// Re-render a previously exported results JSON.
    Plot(PlotArgs),
}

/// Options for evaluation.
#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    /// JSON array of per-sample prior probabilities.
    #[arg(long, value_name = "JSON")]
    pub priors: PathBuf,

    /// JSON array of sampler-convention viewing angles (degrees).
    #[arg(long, value_name = "JSON")]
    pub angles: PathBuf,

    /// Spectral index from the literature (a negative value is treated as a
    /// sign error and its absolute value is used).
    #[arg(short = 'a', long)]
    pub alpha: f64,

    /// Observed polarization fraction, in [0, 1].
    #[arg(short = 'p', long)]
    pub pfrac: f64,

    /// Standard deviation of the polarization fraction.
    #[arg(long, default_value_t = DEFAULT_SIGMA)]
    pub sigma: f64,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export per-sample results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the full run (params + arrays + diagnostics) to JSON.
    #[arg(long = "export-results")]
    pub export_results: Option<PathBuf>,

    /// Export a scatter figure to SVG.
    #[arg(long = "export-svg")]
    pub export_svg: Option<PathBuf>,
}

/// Options for sample-array generation.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Generator shape.
    #[arg(long, value_enum, default_value_t = SampleMode::Triangular)]
    pub mode: SampleMode,

    /// Number of samples (triangular mode).
    #[arg(short = 'n', long, default_value_t = 500)]
    pub count: usize,

    /// Guiding angle (degrees) the triangular draw peaks at.
    #[arg(long, default_value_t = 45.0)]
    pub guide: f64,

    /// Random seed (triangular mode).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Grid step in degrees (grid mode).
    #[arg(long, default_value_t = 5.0)]
    pub step: f64,

    /// Output path for the prior array.
    #[arg(long, value_name = "JSON", default_value = "priors.json")]
    pub priors_out: PathBuf,

    /// Output path for the angle array.
    #[arg(long, value_name = "JSON", default_value = "angles.json")]
    pub angles_out: PathBuf,
}

/// Options for plotting saved results.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Results JSON produced by `relicpol eval --export-results`.
    #[arg(long, value_name = "JSON")]
    pub results: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Also export a scatter figure to SVG.
    #[arg(long = "export-svg")]
    pub export_svg: Option<PathBuf>,
}
