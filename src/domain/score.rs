//! Fit-quality statistics for a model evaluated against an observation set.

use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};
use crate::math::round_to;

/// Read-only bundle of goodness-of-fit statistics.
///
/// Built once by `FittableModel::score` and never mutated. Every accessor takes
/// an optional decimal precision; `None` returns full `f64` precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    r: f64,
    r2: f64,
    chi2: f64,
    rmsd: f64,
}

impl Score {
    /// Statistic names accepted by [`Score::get`].
    pub const NAMES: [&'static str; 4] = ["r", "r2", "chi2", "rmsd"];

    pub fn new(r: f64, r2: f64, chi2: f64, rmsd: f64) -> Self {
        Self { r, r2, chi2, rmsd }
    }

    /// Pearson correlation between predicted and actual values.
    pub fn r(&self, precision: Option<u32>) -> f64 {
        round_to(self.r, precision)
    }

    /// Coefficient of determination, `r²`.
    pub fn r2(&self, precision: Option<u32>) -> f64 {
        round_to(self.r2, precision)
    }

    /// `Σ (y - ŷ)² / y`, skipping observations where `y == 0`.
    pub fn chi2(&self, precision: Option<u32>) -> f64 {
        round_to(self.chi2, precision)
    }

    /// Squared residual of the final observation divided by the count.
    ///
    /// Not a true root-mean-square deviation; see `FittableModel::score`.
    pub fn rmsd(&self, precision: Option<u32>) -> f64 {
        round_to(self.rmsd, precision)
    }

    /// Look a statistic up by name.
    pub fn get(&self, name: &str, precision: Option<u32>) -> Result<f64> {
        match name {
            "r" => Ok(self.r(precision)),
            "r2" => Ok(self.r2(precision)),
            "chi2" => Ok(self.chi2(precision)),
            "rmsd" => Ok(self.rmsd(precision)),
            other => Err(FitError::InvalidProperty {
                name: other.to_string(),
                type_name: "Score",
            }),
        }
    }
}
