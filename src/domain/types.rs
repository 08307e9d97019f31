//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during evaluation
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default dispersion of the polarization-fraction observable.
pub const DEFAULT_SIGMA: f64 = 0.05;

/// How synthetic sample arrays are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SampleMode {
    /// Enumerate sampler angles on a regular grid with unit priors.
    Grid,
    /// Draw sampler angles from a triangular distribution around a guiding
    /// angle, with a linear prior weight decreasing toward edge-on.
    Triangular,
}

impl SampleMode {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            SampleMode::Grid => "grid",
            SampleMode::Triangular => "triangular",
        }
    }
}

/// Scalar parameters of one likelihood evaluation.
///
/// `alpha` is the literature spectral index, `pfrac_obs` the observed
/// polarization fraction in `[0, 1]`, `sigma` the assumed standard deviation
/// of the polarization observable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvalParams {
    pub alpha: f64,
    pub pfrac_obs: f64,
    pub sigma: f64,
}

impl EvalParams {
    pub fn new(alpha: f64, pfrac_obs: f64, sigma: f64) -> Self {
        Self {
            alpha,
            pfrac_obs,
            sigma,
        }
    }
}

/// One batch of input samples: per-sample prior probabilities and
/// sampler-convention viewing angles (degrees).
///
/// The two arrays are index-aligned; the evaluator rejects unequal lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub priors: Vec<f64>,
    pub angles_deg: Vec<f64>,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.angles_deg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles_deg.is_empty()
    }

    /// Min/max summary of both channels, for run summaries.
    pub fn stats(&self) -> SampleStats {
        let mut stats = SampleStats {
            n: self.len(),
            angle_min: f64::INFINITY,
            angle_max: f64::NEG_INFINITY,
            prior_min: f64::INFINITY,
            prior_max: f64::NEG_INFINITY,
        };
        for &a in &self.angles_deg {
            stats.angle_min = stats.angle_min.min(a);
            stats.angle_max = stats.angle_max.max(a);
        }
        for &p in &self.priors {
            stats.prior_min = stats.prior_min.min(p);
            stats.prior_max = stats.prior_max.max(p);
        }
        stats
    }
}

/// Min/max summary of a sample set.
#[derive(Debug, Clone, Copy)]
pub struct SampleStats {
    pub n: usize,
    pub angle_min: f64,
    pub angle_max: f64,
    pub prior_min: f64,
    pub prior_max: f64,
}

/// Structured record for one high-inclination sample.
///
/// Emitted by the batch evaluator for any sample with inclination above the
/// diagnostic threshold, in place of console prints, so callers can route,
/// suppress, or test diagnostic output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub index: usize,
    /// Model-convention inclination angle (degrees).
    pub inclination_deg: f64,
    pub expected_pfrac: f64,
    pub observed_pfrac: f64,
    /// Standardized deviation of observed from expected.
    pub z: f64,
    pub likelihood: f64,
}

/// Output of one batch evaluation.
///
/// Both arrays have the same length as the input angle array. They are
/// populated in one pass and not mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalOutput {
    /// Raw per-sample likelihoods, each in `[0, 1]`.
    pub likelihood: Vec<f64>,
    /// Prior-weighted likelihoods (posterior weights).
    pub posterior: Vec<f64>,
    /// High-inclination diagnostic records, in sample order.
    pub diagnostics: Vec<DiagnosticRecord>,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub priors_path: PathBuf,
    pub angles_path: PathBuf,

    pub alpha: f64,
    pub pfrac_obs: f64,
    pub sigma: f64,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_results: Option<PathBuf>,
    pub export_svg: Option<PathBuf>,
}

impl EvalConfig {
    pub fn params(&self) -> EvalParams {
        EvalParams::new(self.alpha, self.pfrac_obs, self.sigma)
    }
}

/// A saved results file (JSON).
///
/// This is the portable representation of one evaluation run:
/// - the scalar parameters that produced it
/// - per-sample inclination angles (model convention, degrees)
/// - both output arrays
/// - the diagnostic records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsFile {
    pub tool: String,
    /// RFC 3339 generation timestamp.
    pub generated: String,
    pub params: EvalParams,
    pub n_samples: usize,
    pub inclination_deg: Vec<f64>,
    pub likelihood: Vec<f64>,
    pub posterior: Vec<f64>,
    pub diagnostics: Vec<DiagnosticRecord>,
}
