//! Fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit each requested family (in parallel under `ModelSpec::Auto`)
//! - score candidates on the training observations
//! - select the best family by `r2`, preferring the simpler one on ties

pub mod selection;

pub use selection::*;
