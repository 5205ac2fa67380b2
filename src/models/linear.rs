//! Simple linear regression: `f(x) = slope·x + intercept`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Samples;
use crate::error::Result;
use crate::math::{LineSums, round_to};
use crate::models::model::{FittableModel, ModelRecord, coefficient_prefix, validate_pair};

/// A fitted straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleLinear {
    slope: f64,
    intercept: f64,
}

/// Record layout: `name, slope, intercept, coefficients, equation`.
///
/// `coefficients` is `[intercept, slope]` (ascending powers of `x`). Only
/// `name`, `slope` and `intercept` are read back; the rest is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleLinearRecord {
    pub name: String,
    pub slope: f64,
    pub intercept: f64,
    #[serde(default, skip_deserializing)]
    pub coefficients: Vec<f64>,
    #[serde(default, skip_deserializing)]
    pub equation: String,
}

impl ModelRecord for SimpleLinearRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl SimpleLinear {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl FittableModel for SimpleLinear {
    const NAME: &'static str = "fit_curves::SimpleLinear";

    type Record = SimpleLinearRecord;

    fn fit<'a>(x: impl Into<Samples<'a>>, y: impl Into<Samples<'a>>) -> Result<Self> {
        let x: Samples = x.into();
        let y: Samples = y.into();
        validate_pair(x.as_slice(), y.as_slice())?;

        let sums = LineSums::accumulate(x.as_slice(), y.as_slice());
        let (slope, intercept) = sums.solve();
        debug!(n = sums.n, slope, intercept, "fitted simple linear model");

        Ok(Self { slope, intercept })
    }

    fn get_y(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// `(y - intercept) / slope`; a zero slope yields `±inf` (or `NaN`).
    fn get_x(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }

    fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }

    fn equation(&self, precision: Option<u32>) -> String {
        let slope = round_to(self.slope, precision);
        let intercept = round_to(self.intercept, precision);

        // Constant function: no x term at all. `+ 0.0` folds `-0` into `0`.
        if slope == 0.0 {
            return format!("f(x) = {}", intercept + 0.0);
        }

        let mut rhs = format!("{}x", coefficient_prefix(slope));
        if intercept > 0.0 {
            rhs.push_str(&format!(" + {intercept}"));
        } else if intercept < 0.0 {
            rhs.push_str(&format!(" - {}", -intercept));
        }
        format!("f(x) = {rhs}")
    }

    fn to_record(&self) -> SimpleLinearRecord {
        SimpleLinearRecord {
            name: Self::NAME.to_string(),
            slope: self.slope,
            intercept: self.intercept,
            coefficients: vec![self.intercept, self.slope],
            equation: self.equation(None),
        }
    }

    fn from_parameters(record: &SimpleLinearRecord) -> Self {
        Self::new(record.slope, record.intercept)
    }
}
