//! Read/write results JSON files.
//!
//! Results JSON is the "portable" representation of one evaluation run:
//! - the scalar parameters that produced it
//! - per-sample inclination angles and both output arrays
//! - the high-inclination diagnostic records
//!
//! The schema is defined by `domain::ResultsFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::domain::{EvalOutput, EvalParams, ResultsFile};
use crate::error::AppError;

/// Assemble a results file from an evaluation run.
pub fn build_results(
    params: &EvalParams,
    inclination_deg: Vec<f64>,
    output: &EvalOutput,
) -> ResultsFile {
    ResultsFile {
        tool: "relicpol".to_string(),
        generated: Local::now().to_rfc3339(),
        params: *params,
        n_samples: output.likelihood.len(),
        inclination_deg,
        likelihood: output.likelihood.clone(),
        posterior: output.posterior.clone(),
        diagnostics: output.diagnostics.clone(),
    }
}

/// Write a results JSON file.
pub fn write_results_json(path: &Path, results: &ResultsFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create results JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, results)
        .map_err(|e| AppError::new(2, format!("Failed to write results JSON: {e}")))?;
    Ok(())
}

/// Read a results JSON file.
pub fn read_results_json(path: &Path) -> Result<ResultsFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open results JSON '{}': {e}", path.display())))?;
    let results: ResultsFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid results JSON: {e}")))?;
    Ok(results)
}
