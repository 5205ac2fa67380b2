//! The contract shared by all fitted models.
//!
//! Families provide two primitives (evaluate and record conversion); the
//! statistics, prediction over sequences and textual encoding live here so
//! they behave identically for every family.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{Samples, Score};
use crate::error::{FitError, Result};

/// Flat, name-tagged parameter record of one family.
pub trait ModelRecord: Serialize + DeserializeOwned {
    /// The family identifier stored in the record.
    fn name(&self) -> &str;
}

/// A fitted closed-form model.
///
/// Models are immutable: fitting returns a new instance.
pub trait FittableModel: Sized {
    /// Family identifier written to (and required in) records.
    const NAME: &'static str;

    type Record: ModelRecord;

    /// Fit the family to paired observations.
    ///
    /// Fails with `DimensionMismatch` when lengths differ and `NoData` when
    /// both are empty.
    fn fit<'a>(x: impl Into<Samples<'a>>, y: impl Into<Samples<'a>>) -> Result<Self>;

    /// Evaluate the fitted function at `x`.
    fn get_y(&self, x: f64) -> f64;

    /// Invert the fitted function at `y`.
    fn get_x(&self, y: f64) -> f64;

    /// Whether every parameter is finite. Only finite models encode to JSON.
    fn is_finite(&self) -> bool;

    /// Human-readable rendering, e.g. `f(x) = 2x + 1`.
    ///
    /// `precision` only affects displayed coefficients.
    fn equation(&self, precision: Option<u32>) -> String;

    /// Export parameters plus the derived equation.
    fn to_record(&self) -> Self::Record;

    /// Rebuild from the raw parameters of a record whose tag was already checked.
    fn from_parameters(record: &Self::Record) -> Self;

    /// Import a record, rejecting records of another family.
    fn from_record(record: Self::Record) -> Result<Self> {
        check_name(Self::NAME, record.name())?;
        Ok(Self::from_parameters(&record))
    }

    /// Evaluate every input. A scalar is treated as a one-element sequence.
    fn predict<'a>(&self, x: impl Into<Samples<'a>>) -> Vec<f64> {
        let x: Samples = x.into();
        x.as_slice().iter().map(|&xi| self.get_y(xi)).collect()
    }

    /// Score the model against (possibly unseen) observations.
    fn score<'a>(&self, x: impl Into<Samples<'a>>, y: impl Into<Samples<'a>>) -> Result<Score> {
        let x: Samples = x.into();
        let y: Samples = y.into();
        validate_pair(x.as_slice(), y.as_slice())?;
        let predicted = self.predict(x.as_slice());
        Ok(score_predictions(&predicted, y.as_slice()))
    }

    /// Encode the record. JSON has no `NaN`/`inf`, so a model with non-finite
    /// parameters (e.g. a power fit on non-positive data) is rejected.
    fn to_json(&self) -> Result<String> {
        ensure_finite(Self::NAME, self.is_finite())?;
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Decode a record. The `name` tag is checked before any parameter is read,
    /// so a record of another family fails with `TypeMismatch`.
    fn from_json(text: &str) -> Result<Self> {
        let tag: RecordTag = serde_json::from_str(text)?;
        check_name(Self::NAME, &tag.name)?;
        let record: Self::Record = serde_json::from_str(text)?;
        Self::from_record(record)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordTag {
    pub name: String,
}

pub(crate) fn check_name(expected: &str, found: &str) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(FitError::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        })
    }
}

pub(crate) fn ensure_finite(name: &str, finite: bool) -> Result<()> {
    if finite {
        Ok(())
    } else {
        Err(FitError::Serialization(format!(
            "{name} has non-finite parameters and cannot be encoded"
        )))
    }
}

/// Validate an observation set: equal lengths, then non-empty.
pub fn validate_pair(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(FitError::DimensionMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.is_empty() {
        return Err(FitError::NoData);
    }
    Ok(())
}

/// Compute fit statistics of `predicted` against `actual`.
///
/// - `r`: Pearson correlation between predicted and actual
/// - `r2`: `r²`
/// - `chi2`: `Σ (y - ŷ)² / y`, skipping terms where `y == 0`
/// - `rmsd`: the final observation's squared residual over `n`
///
/// `rmsd` keeps only the last residual rather than averaging all of them.
/// Reports and stored scores depend on these values, so the formula is kept.
pub fn score_predictions(predicted: &[f64], actual: &[f64]) -> Score {
    let n = actual.len() as f64;

    let mut sum_p = 0.0;
    let mut sum_a = 0.0;
    let mut sum_pa = 0.0;
    let mut sum_pp = 0.0;
    let mut sum_aa = 0.0;
    let mut chi2 = 0.0;
    let mut rmsd = 0.0;

    for (&p, &a) in predicted.iter().zip(actual) {
        sum_p += p;
        sum_a += a;
        sum_pa += p * a;
        sum_pp += p * p;
        sum_aa += a * a;

        let residual = a - p;
        if a != 0.0 {
            chi2 += residual * residual / a;
        }
        rmsd = residual * residual / n;
    }

    let r = (n * sum_pa - sum_p * sum_a)
        / ((n * sum_pp - sum_p * sum_p) * (n * sum_aa - sum_a * sum_a)).sqrt();

    Score::new(r, r * r, chi2, rmsd)
}

/// Render a multiplicative coefficient in front of `x`.
///
/// `1` renders as nothing and `-1` as a bare minus sign.
pub(crate) fn coefficient_prefix(value: f64) -> String {
    if value == 1.0 {
        String::new()
    } else if value == -1.0 {
        "-".to_string()
    } else {
        format!("{value}")
    }
}
