//! Grid and triangular sample generators.
//!
//! Two shapes of synthetic input:
//!
//! - a regular angle grid with unit priors, for exercising the full domain
//! - a seeded triangular draw around a guiding angle, mimicking the output of
//!   a merger-geometry Monte Carlo run
//!
//! Randomness is always seeded explicitly so runs are reproducible.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Triangular;

use crate::domain::SampleSet;
use crate::error::AppError;

/// Sampler angles live on `[0, 90]` degrees.
const ANGLE_MAX_DEG: f64 = 90.0;

/// Enumerate sampler angles from 0 to 90 degrees (inclusive) with the given
/// step, all with prior probability 1.
pub fn generate_grid(step_deg: f64) -> Result<SampleSet, AppError> {
    if !(step_deg.is_finite() && step_deg > 0.0 && step_deg <= ANGLE_MAX_DEG) {
        return Err(AppError::new(
            2,
            format!("Grid step must lie in (0, 90] degrees; got {step_deg}."),
        ));
    }

    let mut angles_deg = Vec::new();
    let mut angle = 0.0;
    while angle <= ANGLE_MAX_DEG + 1e-9 {
        angles_deg.push(angle.min(ANGLE_MAX_DEG));
        angle += step_deg;
    }

    let priors = vec![1.0; angles_deg.len()];
    Ok(SampleSet { priors, angles_deg })
}

/// Draw `count` sampler angles from a triangular distribution on `[0, 90]`
/// peaked at `mode_deg`, with prior weight `(90 - angle) / 90`.
///
/// The weight decreases linearly toward edge-on geometries, which the
/// upstream merger sampler disfavors.
pub fn generate_triangular(count: usize, mode_deg: f64, seed: u64) -> Result<SampleSet, AppError> {
    if count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if !(0.0..=ANGLE_MAX_DEG).contains(&mode_deg) {
        return Err(AppError::new(
            2,
            format!("Guiding angle must lie in [0, 90] degrees; got {mode_deg}."),
        ));
    }

    let dist = Triangular::new(0.0, ANGLE_MAX_DEG, mode_deg)
        .map_err(|e| AppError::new(4, format!("Triangular distribution error: {e}")))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut priors = Vec::with_capacity(count);
    let mut angles_deg = Vec::with_capacity(count);
    for _ in 0..count {
        let angle: f64 = dist.sample(&mut rng);
        angles_deg.push(angle);
        priors.push((ANGLE_MAX_DEG - angle) / ANGLE_MAX_DEG);
    }

    Ok(SampleSet { priors, angles_deg })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_full_domain() {
        let set = generate_grid(5.0).unwrap();
        assert_eq!(set.len(), 19);
        assert_eq!(set.angles_deg[0], 0.0);
        assert_eq!(set.angles_deg[set.len() - 1], 90.0);
        assert!(set.priors.iter().all(|&p| p == 1.0));
    }

    #[test]
    fn grid_rejects_bad_step() {
        assert!(generate_grid(0.0).is_err());
        assert!(generate_grid(-5.0).is_err());
        assert!(generate_grid(f64::NAN).is_err());
    }

    #[test]
    fn triangular_stays_in_bounds() {
        let set = generate_triangular(500, 30.0, 42).unwrap();
        assert_eq!(set.len(), 500);
        for (&angle, &prior) in set.angles_deg.iter().zip(&set.priors) {
            assert!((0.0..=90.0).contains(&angle), "angle out of range: {angle}");
            assert!((0.0..=1.0).contains(&prior), "prior out of range: {prior}");
            assert!((prior - (90.0 - angle) / 90.0).abs() < 1e-12);
        }
    }

    #[test]
    fn triangular_is_seed_deterministic() {
        let a = generate_triangular(100, 45.0, 7).unwrap();
        let b = generate_triangular(100, 45.0, 7).unwrap();
        assert_eq!(a, b);

        let c = generate_triangular(100, 45.0, 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn triangular_rejects_bad_inputs() {
        assert!(generate_triangular(0, 45.0, 1).is_err());
        assert!(generate_triangular(10, -1.0, 1).is_err());
        assert!(generate_triangular(10, 91.0, 1).is_err());
    }
}
