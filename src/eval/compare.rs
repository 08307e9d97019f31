//! One-sided likelihood comparison of expected vs observed polarization.
//!
//! The standardized deviation is `z = (expected - observed) / sigma`. A model
//! that predicts **more** polarization than observed is treated as fully
//! consistent (`likelihood = 1`); only under-prediction is penalized, via the
//! two-sided Gaussian tail probability `erfc(|z|)`.
//!
//! This asymmetry keeps the constraint conservative: depolarization along the
//! line of sight can always hide polarized flux, but cannot create it.

/// Result of comparing an expected against an observed polarization fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Standardized deviation of observed from expected.
    pub z: f64,
    /// Probability that the observation is consistent with the expectation.
    pub likelihood: f64,
}

/// Compare an expected polarization fraction against an observed one.
///
/// `sigma` must be finite and `> 0`; the batch evaluator validates this before
/// any per-sample work.
pub fn compare(pfrac_expected: f64, pfrac_observed: f64, sigma: f64) -> Comparison {
    let z = (pfrac_expected - pfrac_observed) / sigma;
    let likelihood = if z > 0.0 { 1.0 } else { libm::erfc(z.abs()) };
    Comparison { z, likelihood }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_prediction_is_fully_consistent() {
        let c = compare(0.6, 0.1, 0.05);
        assert_eq!(c.likelihood, 1.0);
        assert!(c.z > 0.0);
    }

    #[test]
    fn exact_match_is_fully_consistent() {
        // erfc(0) = 1, so z = 0 also yields likelihood 1.
        let c = compare(0.3, 0.3, 0.05);
        assert_eq!(c.z, 0.0);
        assert_eq!(c.likelihood, 1.0);
    }

    #[test]
    fn under_prediction_uses_erfc_tail() {
        // One sigma below: erfc(1) = 0.15729920705028513...
        let c = compare(0.25, 0.3, 0.05);
        assert!((c.z + 1.0).abs() < 1e-12);
        assert!((c.likelihood - 0.157_299_207_050_285_13).abs() < 1e-12);
    }

    #[test]
    fn likelihood_decays_with_growing_deficit() {
        let sigma = 0.05;
        let observed = 0.5;
        let mut prev = 1.0;
        for i in 0..20 {
            let expected = observed - 0.02 * i as f64;
            let c = compare(expected, observed, sigma);
            assert!(c.likelihood <= prev, "likelihood must not increase as the deficit grows");
            assert!(c.likelihood > 0.0 && c.likelihood <= 1.0);
            prev = c.likelihood;
        }
    }
}
