//! Likelihood evaluation.
//!
//! Responsibilities:
//!
//! - compare an expected polarization fraction against an observed one (`compare`)
//! - run the comparison across a whole sample array with prior weighting (`batch`)

pub mod batch;
pub mod compare;

pub use batch::*;
pub use compare::*;
