//! Read/write the input channels as JSON float arrays.
//!
//! The upstream sampler hands us two plain sequences of floats; a JSON array
//! per file keeps the format trivially inspectable and editable.

use std::fs::File;
use std::path::Path;

use crate::domain::SampleSet;
use crate::error::AppError;

/// Read a JSON array of floats.
pub fn read_array(path: &Path) -> Result<Vec<f64>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open array file '{}': {e}", path.display())))?;
    let values: Vec<f64> = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid array JSON '{}': {e}", path.display())))?;
    Ok(values)
}

/// Write a JSON array of floats.
pub fn write_array(path: &Path, values: &[f64]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create array file '{}': {e}", path.display())))?;
    serde_json::to_writer(file, values)
        .map_err(|e| AppError::new(2, format!("Failed to write array JSON '{}': {e}", path.display())))?;
    Ok(())
}

/// Load the prior and angle channels as one index-aligned sample set.
///
/// Lengths are not reconciled here; the evaluator rejects mismatches with a
/// domain error so the caller sees one consistent failure path.
pub fn read_sample_set(priors_path: &Path, angles_path: &Path) -> Result<SampleSet, AppError> {
    let priors = read_array(priors_path)?;
    let angles_deg = read_array(angles_path)?;
    Ok(SampleSet { priors, angles_deg })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_json_round_trips() {
        let values = vec![0.0, 0.25, 88.5];
        let json = serde_json::to_string(&values).unwrap();
        let back: Vec<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(values, back);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = read_array(Path::new("/nonexistent/priors.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
