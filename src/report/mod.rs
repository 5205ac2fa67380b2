//! Reporting utilities: residuals, outliers and formatted terminal output.
//!
//! Formatting code lives in one place so the math/fitting code stays clean and
//! output changes are localized.

pub mod format;

pub use format::*;

use crate::error::AppError;
use crate::models::AnyModel;

/// Fitted value and residual for one observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Residual {
    pub x: f64,
    pub y_obs: f64,
    pub y_fit: f64,
    pub residual: f64,
}

/// Compute fitted values and residuals (`y_obs - y_fit`) for each observation.
pub fn compute_residuals(x: &[f64], y: &[f64], model: &AnyModel) -> Result<Vec<Residual>, AppError> {
    let fitted = model.predict(x);
    let mut out = Vec::with_capacity(x.len());
    for ((&xi, &yi), y_fit) in x.iter().zip(y).zip(fitted) {
        if !y_fit.is_finite() {
            return Err(AppError::new(
                4,
                format!("Non-finite model prediction at x={xi} during residual computation."),
            ));
        }
        out.push(Residual {
            x: xi,
            y_obs: yi,
            y_fit,
            residual: yi - y_fit,
        });
    }
    Ok(out)
}

/// The `top_n` observations with the largest absolute residuals.
pub fn largest_residuals(residuals: &[Residual], top_n: usize) -> Vec<Residual> {
    let mut sorted = residuals.to_vec();
    sorted.sort_by(|a, b| {
        b.residual
            .abs()
            .partial_cmp(&a.residual.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(top_n);
    sorted
}
