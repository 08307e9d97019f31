//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - evaluation parameters and run configuration (`EvalParams`, `EvalConfig`)
//! - input sample sets (`SampleSet`)
//! - evaluation outputs and diagnostics (`EvalOutput`, `DiagnosticRecord`)

pub mod types;

pub use types::*;
