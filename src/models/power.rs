//! Power regression: `f(x) = coefficient·x^exponent`.
//!
//! Fitted by log-linearization: `ln y = ln(coefficient) + exponent·ln x` is a
//! straight line in `(ln x, ln y)`, so the fit delegates to [`SimpleLinear`].
//! Non-positive inputs are not pre-validated; their logarithms are `NaN`/`-inf`
//! and propagate into the parameters.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Samples;
use crate::error::Result;
use crate::math::round_to;
use crate::models::linear::SimpleLinear;
use crate::models::model::{FittableModel, ModelRecord, coefficient_prefix};

/// A fitted power law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Power {
    coefficient: f64,
    exponent: f64,
    /// Line fitted in log space; absent when restored from a record.
    linear: Option<SimpleLinear>,
}

/// Record layout: `name, coefficient, exponent, equation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRecord {
    pub name: String,
    pub coefficient: f64,
    pub exponent: f64,
    #[serde(default, skip_deserializing)]
    pub equation: String,
}

impl ModelRecord for PowerRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Power {
    pub fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
            linear: None,
        }
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// The log-space line this model was derived from, if it was fitted here.
    pub fn linear_fit(&self) -> Option<&SimpleLinear> {
        self.linear.as_ref()
    }
}

impl FittableModel for Power {
    const NAME: &'static str = "fit_curves::Power";

    type Record = PowerRecord;

    fn fit<'a>(x: impl Into<Samples<'a>>, y: impl Into<Samples<'a>>) -> Result<Self> {
        let x: Samples = x.into();
        let y: Samples = y.into();
        let ln_x: Vec<f64> = x.as_slice().iter().map(|v| v.ln()).collect();
        let ln_y: Vec<f64> = y.as_slice().iter().map(|v| v.ln()).collect();

        let linear = SimpleLinear::fit(ln_x, ln_y)?;
        let coefficient = linear.intercept().exp();
        let exponent = linear.slope();
        debug!(coefficient, exponent, "fitted power model");

        Ok(Self {
            coefficient,
            exponent,
            linear: Some(linear),
        })
    }

    fn get_y(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.exponent)
    }

    /// `(y / coefficient)^(1 / exponent)`.
    ///
    /// A zero exponent uses `0` as the inverse exponent and a zero coefficient
    /// uses `0` as the base, instead of dividing by zero.
    fn get_x(&self, y: f64) -> f64 {
        let inverse = if self.exponent == 0.0 { 0.0 } else { 1.0 / self.exponent };
        let base = if self.coefficient == 0.0 { 0.0 } else { y / self.coefficient };
        base.powf(inverse)
    }

    fn is_finite(&self) -> bool {
        self.coefficient.is_finite() && self.exponent.is_finite()
    }

    fn equation(&self, precision: Option<u32>) -> String {
        // `+ 0.0` folds `-0` into `0` when no rounding is applied.
        let coefficient = round_to(self.coefficient, precision) + 0.0;
        let exponent = round_to(self.exponent, precision) + 0.0;
        format!("f(x) = {}x^{exponent}", coefficient_prefix(coefficient))
    }

    fn to_record(&self) -> PowerRecord {
        PowerRecord {
            name: Self::NAME.to_string(),
            coefficient: self.coefficient,
            exponent: self.exponent,
            equation: self.equation(None),
        }
    }

    fn from_parameters(record: &PowerRecord) -> Self {
        Self::new(record.coefficient, record.exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitError;

    const X: [f64; 11] = [17.6, 26.0, 31.9, 38.9, 45.8, 51.2, 58.1, 64.7, 66.7, 80.8, 82.9];
    const Y: [f64; 11] = [159.9, 206.9, 236.8, 269.9, 300.6, 323.6, 351.7, 377.6, 384.1, 437.2, 444.7];

    #[test]
    fn fits_reference_dataset() {
        let model = Power::fit(&X, &Y).unwrap();
        assert_eq!(round_to(model.coefficient(), Some(2)), 24.13);
        assert_eq!(round_to(model.exponent(), Some(2)), 0.66);
        assert_eq!(model.equation(Some(2)), "f(x) = 24.13x^0.66");

        let score = model.score(&X, &Y).unwrap();
        assert_eq!(score.r2(Some(6)), 0.999987);
    }

    #[test]
    fn keeps_log_space_fit() {
        let model = Power::fit(&X, &Y).unwrap();
        let linear = model.linear_fit().expect("fitted model keeps its log fit");
        assert_eq!(linear.slope(), model.exponent());
        assert_eq!(linear.intercept().exp(), model.coefficient());
    }

    #[test]
    fn exact_power_law_is_recovered() {
        let x = [1.0, 2.0, 4.0, 8.0];
        let y: Vec<f64> = x.iter().map(|v: &f64| 3.0 * v.powf(2.0)).collect();
        let model = Power::fit(&x, &y).unwrap();
        assert!((model.coefficient() - 3.0).abs() < 1e-9);
        assert!((model.exponent() - 2.0).abs() < 1e-9);
        assert!((model.get_x(model.get_y(5.0)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_input_propagates_nan() {
        let model = Power::fit(&[-1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!(model.exponent().is_nan());
        assert!(model.coefficient().is_nan());
    }

    #[test]
    fn non_finite_model_is_not_encoded() {
        let model = Power::fit(&[-1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!(!model.is_finite());
        assert!(matches!(model.to_json(), Err(FitError::Serialization(_))));
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = Power::fit(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, FitError::DimensionMismatch { x_len: 2, y_len: 1 });
    }

    #[test]
    fn get_x_zero_guards() {
        // Zero coefficient: base is 0.
        assert_eq!(Power::new(0.0, 2.0).get_x(5.0), 0.0);
        // Zero exponent: inverse exponent is 0, so any base maps to 1.
        assert_eq!(Power::new(2.0, 0.0).get_x(5.0), 1.0);
        assert!(Power::new(2.0, 0.0).get_x(5.0).is_finite());
    }

    #[test]
    fn equation_hides_unit_coefficient_and_keeps_exponent_sign() {
        assert_eq!(Power::new(1.0, -0.5).equation(None), "f(x) = x^-0.5");
        assert_eq!(Power::new(-1.0, 2.0).equation(None), "f(x) = -x^2");
        assert_eq!(Power::new(1.004, 1.5).equation(Some(2)), "f(x) = x^1.5");
    }

    #[test]
    fn negative_zero_exponent_renders_as_zero() {
        assert_eq!(Power::new(2.0, -0.0).equation(None), "f(x) = 2x^0");
        assert_eq!(Power::new(2.0, -0.0).equation(Some(2)), "f(x) = 2x^0");
    }

    #[test]
    fn record_layout_and_round_trip() {
        let model = Power::new(2.5, 0.5);
        let json = model.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"name":"fit_curves::Power","coefficient":2.5,"exponent":0.5,"equation":"f(x) = 2.5x^0.5"}"#
        );
        let restored = Power::from_json(&json).unwrap();
        assert_eq!(restored.to_record(), model.to_record());
    }

    #[test]
    fn restored_model_has_no_log_fit() {
        let fitted = Power::fit(&X, &Y).unwrap();
        let restored = Power::from_record(fitted.to_record()).unwrap();
        assert!(restored.linear_fit().is_none());
        assert_eq!(restored.to_record(), fitted.to_record());
    }

    #[test]
    fn linear_record_is_type_mismatch() {
        let record = PowerRecord {
            name: SimpleLinear::NAME.to_string(),
            coefficient: 1.0,
            exponent: 1.0,
            equation: String::new(),
        };
        assert!(matches!(
            Power::from_record(record),
            Err(FitError::TypeMismatch { .. })
        ));
    }
}
