//! Reporting utilities: run summaries and diagnostics tables.
//!
//! We keep formatting code in one place so:
//! - the model/evaluation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{DiagnosticRecord, EvalOutput, EvalParams, SampleStats};
use crate::eval::HIGH_INCLINATION_DEG;

/// Format the full run summary (parameters + sample stats + outcome counts).
pub fn format_run_summary(params: &EvalParams, stats: &SampleStats, output: &EvalOutput) -> String {
    let mut out = String::new();

    out.push_str("=== relicpol - Polarization Likelihood Weighting ===\n");
    out.push_str(&format!(
        "Params: alpha={:.3} | pfrac_obs={:.3} | sigma={:.3}\n",
        params.alpha, params.pfrac_obs, params.sigma
    ));
    out.push_str(&format!(
        "Samples: n={} | sampler angle=[{:.2}, {:.2}] deg | prior=[{:.3}, {:.3}]\n",
        stats.n, stats.angle_min, stats.angle_max, stats.prior_min, stats.prior_max
    ));

    let consistent = output.likelihood.iter().filter(|&&l| l == 1.0).count();
    let mass: f64 = output.posterior.iter().sum();
    out.push_str(&format!(
        "Outcome: {consistent} of {} samples fully consistent | posterior mass={:.4}\n",
        output.likelihood.len(),
        mass
    ));
    out.push_str(&format!(
        "Diagnostics: {} high-inclination samples (delta > {:.0} deg)\n",
        output.diagnostics.len(),
        HIGH_INCLINATION_DEG
    ));

    out
}

/// Format the high-inclination diagnostics as an aligned table.
///
/// Returns an empty string when there is nothing to report, so callers can
/// print unconditionally.
pub fn format_diagnostics(records: &[DiagnosticRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\nHigh-inclination samples (delta > {HIGH_INCLINATION_DEG:.0} deg):\n"
    ));
    out.push_str("  index  delta_deg  expected  observed         z  likelihood\n");
    for r in records {
        out.push_str(&format!(
            "  {:>5}  {:>9.3}  {:>8.4}  {:>8.4}  {:>8.3}  {:>10.6}\n",
            r.index, r.inclination_deg, r.expected_pfrac, r.observed_pfrac, r.z, r.likelihood
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_output() -> EvalOutput {
        EvalOutput {
            likelihood: vec![0.01, 1.0],
            posterior: vec![0.01, 0.5],
            diagnostics: vec![DiagnosticRecord {
                index: 1,
                inclination_deg: 80.0,
                expected_pfrac: 0.6548,
                observed_pfrac: 0.1,
                z: 11.1,
                likelihood: 1.0,
            }],
        }
    }

    #[test]
    fn summary_counts_consistent_samples() {
        let params = EvalParams::new(1.2, 0.1, 0.05);
        let stats = SampleStats {
            n: 2,
            angle_min: 10.0,
            angle_max: 80.0,
            prior_min: 1.0,
            prior_max: 1.0,
        };
        let text = format_run_summary(&params, &stats, &sample_output());
        assert!(text.contains("1 of 2 samples fully consistent"));
        assert!(text.contains("alpha=1.200"));
        assert!(text.contains("1 high-inclination samples"));
    }

    #[test]
    fn diagnostics_table_lists_each_record() {
        let text = format_diagnostics(&sample_output().diagnostics);
        assert!(text.contains("80.000"));
        assert!(text.contains("0.6548"));
        assert!(text.lines().count() >= 3);
    }

    #[test]
    fn empty_diagnostics_format_to_nothing() {
        assert_eq!(format_diagnostics(&[]), "");
    }
}
