//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be
//! passed between ingest, fitting, reporting and the CLI without conversion.

use std::borrow::Cow;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A concrete closed-form family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// `f(x) = slope·x + intercept`
    Linear,
    /// `f(x) = coefficient·x^exponent`
    Power,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::Linear, ModelKind::Power];

    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Linear => "Simple linear",
            ModelKind::Power => "Power",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which family (or families) to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelSpec {
    /// Fit every family and keep the one with the highest `r2`.
    Auto,
    Linear,
    Power,
}

impl ModelSpec {
    /// Families to attempt, simplest first.
    pub fn kinds(self) -> Vec<ModelKind> {
        match self {
            ModelSpec::Auto => ModelKind::ALL.to_vec(),
            ModelSpec::Linear => vec![ModelKind::Linear],
            ModelSpec::Power => vec![ModelKind::Power],
        }
    }
}

/// Inputs accepted wherever `x`/`y` values are expected.
///
/// A single scalar is treated as a one-element sequence, so
/// `model.predict(2.0)` and `model.predict(&[2.0])` are equivalent.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples<'a>(Cow<'a, [f64]>);

impl<'a> Samples<'a> {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0.into_owned()
    }
}

impl From<f64> for Samples<'_> {
    fn from(value: f64) -> Self {
        Samples(Cow::Owned(vec![value]))
    }
}

impl<'a> From<&'a [f64]> for Samples<'a> {
    fn from(values: &'a [f64]) -> Self {
        Samples(Cow::Borrowed(values))
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Samples<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        Samples(Cow::Borrowed(values.as_slice()))
    }
}

impl<'a> From<&'a Vec<f64>> for Samples<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Samples(Cow::Borrowed(values.as_slice()))
    }
}

impl From<Vec<f64>> for Samples<'_> {
    fn from(values: Vec<f64>) -> Self {
        Samples(Cow::Owned(values))
    }
}

/// Summary stats about the observations actually used for fitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DatasetStats {
    /// Compute stats over paired observations. Returns `None` for an empty set.
    pub fn from_points(x: &[f64], y: &[f64]) -> Option<Self> {
        if x.is_empty() || y.is_empty() {
            return None;
        }
        let (x_min, x_max) = min_max(x);
        let (y_min, y_max) = min_max(y);
        Some(Self {
            n_points: x.len().min(y.len()),
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_becomes_single_sample() {
        let s: Samples = 3.5_f64.into();
        assert_eq!(s.as_slice(), &[3.5]);
    }

    #[test]
    fn slices_are_borrowed_unchanged() {
        let v = vec![1.0, 2.0];
        let s: Samples = (&v).into();
        assert_eq!(s.len(), 2);
        let a: Samples = (&[1.0, 2.0, 3.0]).into();
        assert_eq!(a.into_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn auto_spec_lists_simplest_first() {
        assert_eq!(ModelSpec::Auto.kinds(), vec![ModelKind::Linear, ModelKind::Power]);
        assert_eq!(ModelSpec::Power.kinds(), vec![ModelKind::Power]);
    }

    #[test]
    fn dataset_stats_ranges() {
        let stats = DatasetStats::from_points(&[3.0, 1.0, 2.0], &[10.0, -1.0, 4.0]).unwrap();
        assert_eq!(stats.n_points, 3);
        assert_eq!((stats.x_min, stats.x_max), (1.0, 3.0));
        assert_eq!((stats.y_min, stats.y_max), (-1.0, 10.0));
        assert!(DatasetStats::from_points(&[], &[]).is_none());
    }
}
