//! Shock-compression polarization model.
//!
//! The model is implemented as small, pure functions so that batch evaluation
//! code can stay generic.

pub mod shock;

pub use shock::*;
