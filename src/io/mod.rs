//! Input/output helpers.
//!
//! - float-array JSON read/write for the two input channels (`arrays`)
//! - results JSON read/write (`results`)
//! - per-sample CSV export (`export`)

pub mod arrays;
pub mod export;
pub mod results;

pub use arrays::*;
pub use export::*;
pub use results::*;
