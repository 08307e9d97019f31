//! Shared "evaluation pipeline" logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load channels -> batch evaluation -> convention change for plotting
//!
//! The CLI can then focus on presentation (printing vs exports).

use crate::domain::{EvalConfig, EvalOutput, SampleSet, SampleStats};
use crate::error::AppError;
use crate::eval::evaluate;
use crate::io::read_sample_set;

/// All computed outputs of a single `relicpol eval` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: SampleSet,
    pub stats: SampleStats,
    /// Model-convention inclination per sample (degrees), for plotting.
    pub inclination_deg: Vec<f64>,
    pub output: EvalOutput,
}

/// Execute the full evaluation pipeline and return the computed outputs.
pub fn run_eval(config: &EvalConfig) -> Result<RunOutput, AppError> {
    // 1) Load the two input channels.
    let samples = read_sample_set(&config.priors_path, &config.angles_path)?;

    run_eval_with_samples(config, samples)
}

/// Execute the evaluation pipeline with pre-loaded samples.
///
/// This is useful for callers that generate samples in-process rather than
/// reading them from files.
pub fn run_eval_with_samples(
    config: &EvalConfig,
    samples: SampleSet,
) -> Result<RunOutput, AppError> {
    // 2) Run the batch evaluator.
    let output = evaluate(&samples.priors, &samples.angles_deg, &config.params())?;

    // 3) The figure is drawn against the model's inclination convention.
    let inclination_deg = samples.angles_deg.iter().map(|a| 90.0 - a).collect();
    let stats = samples.stats();

    Ok(RunOutput {
        samples,
        stats,
        inclination_deg,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> EvalConfig {
        EvalConfig {
            priors_path: PathBuf::new(),
            angles_path: PathBuf::new(),
            alpha: 1.2,
            pfrac_obs: 0.1,
            sigma: 0.05,
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_csv: None,
            export_results: None,
            export_svg: None,
        }
    }

    #[test]
    fn pipeline_converts_angle_convention() {
        let samples = SampleSet {
            priors: vec![1.0, 1.0],
            angles_deg: vec![80.0, 10.0],
        };
        let run = run_eval_with_samples(&config(), samples).unwrap();
        assert_eq!(run.inclination_deg, vec![10.0, 80.0]);
        assert_eq!(run.output.likelihood.len(), 2);
        assert_eq!(run.stats.n, 2);
    }

    #[test]
    fn pipeline_surfaces_domain_errors() {
        let samples = SampleSet {
            priors: vec![1.0],
            angles_deg: vec![45.0],
        };
        let mut bad = config();
        bad.pfrac_obs = 1.5;
        let err = run_eval_with_samples(&bad, samples).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
