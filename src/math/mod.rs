//! Mathematical utilities: closed-form least squares and display precision.

pub mod ols;
pub mod precision;

pub use ols::*;
pub use precision::*;
