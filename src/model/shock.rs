//! Strong-field shock-compression polarization model.
//!
//! For a shock with spectral index `alpha` viewed at inclination `delta`,
//! the expected fractional polarization is:
//!
//! ```text
//! R     = (alpha + 1) / (alpha - 0.5)        shock compression ratio
//! gamma = 2*alpha + 1                        electron spectral index
//! C     = (gamma + 1) / (gamma + 7/3)
//! Q     = (2/15) * (13R - 7) / (R - 1)
//! <P>   = C * sin²(delta) / (Q - sin²(delta))
//! ```
//!
//! Numerical notes:
//! - `alpha = 0.5` makes `R` undefined, `R = 1` makes `Q` undefined, and
//!   `Q = sin²(delta)` makes the final division undefined. All three are
//!   rejected with a typed [`EvalError::ModelSingularity`] instead of being
//!   allowed to propagate as non-finite floats.
//! - For `alpha ≥ 0` away from 0.5, `Q ≥ 22/15 > sin²(delta)`, so the latter
//!   two guards can only trip for callers passing raw negative alphas.

use crate::error::EvalError;

/// Tolerance around the model's singular parameter values.
const SINGULARITY_EPS: f64 = 1e-9;

/// Shock compression ratio `R` derived from the spectral index.
pub fn compression_ratio(alpha: f64) -> Result<f64, EvalError> {
    if (alpha - 0.5).abs() < SINGULARITY_EPS {
        return Err(EvalError::ModelSingularity {
            alpha,
            detail: "compression ratio diverges at alpha = 0.5",
        });
    }
    Ok((alpha + 1.0) / (alpha - 0.5))
}

/// Expected fractional polarization at inclination `delta_deg` (degrees)
/// for spectral index `alpha`, under the strong-field approximation.
///
/// Pure function; callers are responsible for bounds-checking `delta_deg`
/// into `[0, 90]` beforehand (the batch evaluator does).
pub fn expected_polarization(delta_deg: f64, alpha: f64) -> Result<f64, EvalError> {
    let ratio = compression_ratio(alpha)?;
    if (ratio - 1.0).abs() < SINGULARITY_EPS {
        return Err(EvalError::ModelSingularity {
            alpha,
            detail: "compression-ratio term diverges at R = 1",
        });
    }

    let gamma = 2.0 * alpha + 1.0;
    let gamma_coeff = (gamma + 1.0) / (gamma + 7.0 / 3.0);
    let ratio_term = (2.0 / 15.0) * (13.0 * ratio - 7.0) / (ratio - 1.0);

    let delta_rad = delta_deg.to_radians();
    let angle_term = delta_rad.sin().powi(2);

    if (ratio_term - angle_term).abs() < SINGULARITY_EPS {
        return Err(EvalError::ModelSingularity {
            alpha,
            detail: "sin²(delta) coincides with the compression-ratio term",
        });
    }

    Ok(gamma_coeff * angle_term / (ratio_term - angle_term))
}
