//! Batch likelihood evaluation over a sample array.
//!
//! For each simulated geometry, the sampler-convention viewing angle is
//! converted to the model's inclination convention (`delta = 90 - angle`),
//! bounds-checked, pushed through the shock model and the likelihood
//! comparison, and combined with the externally supplied prior probability.
//!
//! Global parameter checks run before any per-sample work; any per-sample
//! violation aborts the whole batch. The per-sample map has no data
//! dependency between iterations, so it runs on rayon with order-preserving
//! collection — results are bit-identical to a sequential pass.

use rayon::prelude::*;

use crate::domain::{DiagnosticRecord, EvalOutput, EvalParams};
use crate::error::EvalError;
use crate::eval::compare::compare;
use crate::model::expected_polarization;

/// Inclination (degrees) above which a diagnostic record is emitted.
pub const HIGH_INCLINATION_DEG: f64 = 70.0;

struct PerSample {
    likelihood: f64,
    posterior: f64,
    diagnostic: Option<DiagnosticRecord>,
}

/// Evaluate the polarization likelihood for every sample and weight it by the
/// per-sample prior.
///
/// A negative `alpha` is treated as a sign error and silently coerced to its
/// absolute value; all other precondition violations are hard errors and no
/// partial results are returned.
pub fn evaluate(
    priors: &[f64],
    sampler_angles: &[f64],
    params: &EvalParams,
) -> Result<EvalOutput, EvalError> {
    let alpha = params.alpha.abs();
    let observed = params.pfrac_obs;

    if !(0.0..=1.0).contains(&observed) {
        return Err(EvalError::InvalidPolarizationFraction { pfrac: observed });
    }
    if !(params.sigma.is_finite() && params.sigma > 0.0) {
        return Err(EvalError::InvalidDispersion {
            sigma: params.sigma,
        });
    }
    if priors.len() != sampler_angles.len() {
        return Err(EvalError::LengthMismatch {
            priors: priors.len(),
            angles: sampler_angles.len(),
        });
    }

    let samples: Vec<PerSample> = (0..sampler_angles.len())
        .into_par_iter()
        .map(|index| {
            // Sampler and model quote the viewing angle from opposite axes.
            let delta_deg = 90.0 - sampler_angles[index];
            if !(0.0..=90.0).contains(&delta_deg) {
                return Err(EvalError::InvalidAngle { index, delta_deg });
            }

            let expected = expected_polarization(delta_deg, alpha)?;
            let cmp = compare(expected, observed, params.sigma);

            let diagnostic = (delta_deg > HIGH_INCLINATION_DEG).then(|| DiagnosticRecord {
                index,
                inclination_deg: delta_deg,
                expected_pfrac: expected,
                observed_pfrac: observed,
                z: cmp.z,
                likelihood: cmp.likelihood,
            });

            Ok(PerSample {
                likelihood: cmp.likelihood,
                posterior: cmp.likelihood * priors[index],
                diagnostic,
            })
        })
        .collect::<Result<_, EvalError>>()?;

    let mut output = EvalOutput {
        likelihood: Vec::with_capacity(samples.len()),
        posterior: Vec::with_capacity(samples.len()),
        diagnostics: Vec::new(),
    };
    for sample in samples {
        output.likelihood.push(sample.likelihood);
        output.posterior.push(sample.posterior);
        if let Some(record) = sample.diagnostic {
            output.diagnostics.push(record);
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(alpha: f64, pfrac: f64, sigma: f64) -> EvalParams {
        EvalParams::new(alpha, pfrac, sigma)
    }

    #[test]
    fn two_sample_scenario() {
        // angle 80 -> delta 10 (face-on, low expectation -> erfc tail);
        // angle 10 -> delta 80 (edge-on, high expectation -> exactly 1).
        let priors = [1.0, 1.0];
        let angles = [80.0, 10.0];
        let out = evaluate(&priors, &angles, &params(1.2, 0.1, 0.05)).unwrap();

        assert_eq!(out.likelihood.len(), 2);
        assert!(out.likelihood[0] > 0.0 && out.likelihood[0] < 0.05);
        assert_eq!(out.likelihood[1], 1.0);

        // Unit priors: weighted output equals the raw likelihoods.
        assert_eq!(out.posterior, out.likelihood);

        // Only the delta = 80 sample crosses the diagnostic threshold.
        assert_eq!(out.diagnostics.len(), 1);
        let d = &out.diagnostics[0];
        assert_eq!(d.index, 1);
        assert_eq!(d.inclination_deg, 80.0);
        assert_eq!(d.likelihood, 1.0);
        assert_eq!(d.observed_pfrac, 0.1);
    }

    #[test]
    fn posterior_is_prior_times_likelihood() {
        let priors = [0.25, 0.5, 0.75];
        let angles = [30.0, 45.0, 60.0];
        let out = evaluate(&priors, &angles, &params(1.0, 0.2, 0.05)).unwrap();
        for i in 0..3 {
            assert_eq!(out.posterior[i], out.likelihood[i] * priors[i]);
        }
    }

    #[test]
    fn likelihoods_stay_in_unit_interval() {
        let priors = vec![1.0; 91];
        let angles: Vec<f64> = (0..=90).map(|a| a as f64).collect();
        let out = evaluate(&priors, &angles, &params(1.2, 0.3, 0.05)).unwrap();
        for &l in &out.likelihood {
            assert!((0.0..=1.0).contains(&l), "likelihood out of range: {l}");
        }
    }

    #[test]
    fn rejects_out_of_range_pfrac() {
        let priors = [1.0];
        let angles = [45.0];
        for &bad in &[1.5, -0.1] {
            let err = evaluate(&priors, &angles, &params(1.2, bad, 0.05)).unwrap_err();
            assert!(matches!(err, EvalError::InvalidPolarizationFraction { .. }));
        }
    }

    #[test]
    fn rejects_out_of_range_angle() {
        // sampler angle -5 -> delta 95
        let err = evaluate(&[1.0], &[-5.0], &params(1.2, 0.1, 0.05)).unwrap_err();
        assert!(matches!(
            err,
            EvalError::InvalidAngle { index: 0, delta_deg } if delta_deg == 95.0
        ));

        // sampler angle 100 -> delta -10
        let err = evaluate(&[1.0], &[100.0], &params(1.2, 0.1, 0.05)).unwrap_err();
        assert!(matches!(err, EvalError::InvalidAngle { .. }));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = evaluate(&[1.0, 1.0], &[45.0], &params(1.2, 0.1, 0.05)).unwrap_err();
        assert_eq!(
            err,
            EvalError::LengthMismatch {
                priors: 2,
                angles: 1
            }
        );
    }

    #[test]
    fn rejects_non_positive_dispersion() {
        for &bad in &[0.0, -0.05, f64::NAN] {
            let err = evaluate(&[1.0], &[45.0], &params(1.2, 0.1, bad)).unwrap_err();
            assert!(matches!(err, EvalError::InvalidDispersion { .. }));
        }
    }

    #[test]
    fn negative_alpha_is_coerced() {
        let priors = [0.7, 0.3];
        let angles = [20.0, 70.0];
        let pos = evaluate(&priors, &angles, &params(1.2, 0.1, 0.05)).unwrap();
        let neg = evaluate(&priors, &angles, &params(-1.2, 0.1, 0.05)).unwrap();
        assert_eq!(pos, neg);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let priors: Vec<f64> = (0..50).map(|i| (i as f64) / 50.0).collect();
        let angles: Vec<f64> = (0..50).map(|i| (i as f64) * 90.0 / 49.0).collect();
        let p = params(1.2, 0.14, 0.05);
        let first = evaluate(&priors, &angles, &p).unwrap();
        let second = evaluate(&priors, &angles, &p).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn threshold_is_strict() {
        // delta exactly 70 must not emit a diagnostic.
        let out = evaluate(&[1.0], &[20.0], &params(1.2, 0.1, 0.05)).unwrap();
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn empty_inputs_produce_empty_outputs() {
        let out = evaluate(&[], &[], &params(1.2, 0.1, 0.05)).unwrap();
        assert!(out.likelihood.is_empty());
        assert!(out.posterior.is_empty());
        assert!(out.diagnostics.is_empty());
    }
}
