//! Error types.
//!
//! Two layers:
//!
//! - [`EvalError`] — typed domain errors from the likelihood core. These are
//!   unrecoverable for the current invocation: the caller gets a clear failure
//!   and no output arrays.
//! - [`AppError`] — app-level error carrying an exit code and a message for
//!   the binary front-end. Exit codes: 2 = input/file errors, 3 = domain
//!   errors, 4 = internal.

/// Domain errors raised by the likelihood core.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A model-convention inclination angle fell outside `[0, 90]` degrees.
    InvalidAngle { index: usize, delta_deg: f64 },
    /// The observed polarization fraction fell outside `[0, 1]`.
    InvalidPolarizationFraction { pfrac: f64 },
    /// The dispersion was non-finite or not strictly positive.
    InvalidDispersion { sigma: f64 },
    /// The shock model hit an undefined ratio for these parameters.
    ModelSingularity { alpha: f64, detail: &'static str },
    /// Prior and angle arrays differ in length.
    LengthMismatch { priors: usize, angles: usize },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::InvalidAngle { index, delta_deg } => write!(
                f,
                "Inclination angle must lie in [0, 90] degrees; sample {index} gives {delta_deg} degrees."
            ),
            EvalError::InvalidPolarizationFraction { pfrac } => write!(
                f,
                "Observed polarization fraction must lie in [0, 1]; got {pfrac}."
            ),
            EvalError::InvalidDispersion { sigma } => {
                write!(f, "Dispersion must be finite and > 0; got {sigma}.")
            }
            EvalError::ModelSingularity { alpha, detail } => {
                write!(f, "Shock model undefined for alpha = {alpha}: {detail}.")
            }
            EvalError::LengthMismatch { priors, angles } => write!(
                f,
                "Prior and angle arrays must have equal length; got {priors} priors and {angles} angles."
            ),
        }
    }
}

impl std::error::Error for EvalError {}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<EvalError> for AppError {
    fn from(err: EvalError) -> Self {
        AppError::new(3, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
