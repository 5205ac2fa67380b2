//! `fit-curves` library crate.
//!
//! Closed-form curve fitting: simple linear regression and power regression
//! (log-linearized onto the linear fit), goodness-of-fit scoring and lossless
//! model records.
//!
//! The binary (`fc`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the models can be embedded elsewhere without the CLI
//!
//! ```
//! use fit_curves::models::{FittableModel, SimpleLinear};
//!
//! let model = SimpleLinear::fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
//! assert_eq!(model.equation(None), "f(x) = 2x + 1");
//! assert_eq!(model.predict(4.0), vec![9.0]);
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;

pub use domain::{ModelKind, ModelSpec, Samples, Score};
pub use error::{AppError, FitError};
pub use models::{AnyModel, FittableModel, Power, SimpleLinear};
