//! Export per-sample results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{EvalOutput, SampleSet};
use crate::error::AppError;

/// Write per-sample results to a CSV file.
pub fn write_results_csv(
    path: &Path,
    samples: &SampleSet,
    output: &EvalOutput,
) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "index,sampler_angle_deg,inclination_deg,prior,likelihood,posterior")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for i in 0..output.likelihood.len() {
        let angle = samples.angles_deg[i];
        writeln!(
            file,
            "{},{:.6},{:.6},{:.10},{:.10},{:.10}",
            i,
            angle,
            90.0 - angle,
            samples.priors[i],
            output.likelihood[i],
            output.posterior[i],
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
