//! Closed-form model families.
//!
//! Every family implements [`FittableModel`]: it supplies the closed-form
//! evaluation (`get_y`), its inverse, equation rendering and its record shape,
//! and inherits prediction, scoring and JSON encoding from the trait.

pub mod any;
pub mod linear;
pub mod model;
pub mod power;

pub use any::*;
pub use linear::*;
pub use model::*;
pub use power::*;
