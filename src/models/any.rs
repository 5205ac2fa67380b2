//! A closed set of families for code that only learns the family at runtime
//! (CLI dispatch, model files, auto selection).

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::domain::{ModelKind, Samples, Score};
use crate::error::{FitError, Result};
use crate::models::linear::SimpleLinear;
use crate::models::model::{FittableModel, ensure_finite};
use crate::models::power::Power;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyModel {
    Linear(SimpleLinear),
    Power(Power),
}

impl AnyModel {
    /// Fit the requested family.
    pub fn fit<'a>(kind: ModelKind, x: impl Into<Samples<'a>>, y: impl Into<Samples<'a>>) -> Result<Self> {
        Ok(match kind {
            ModelKind::Linear => AnyModel::Linear(SimpleLinear::fit(x, y)?),
            ModelKind::Power => AnyModel::Power(Power::fit(x, y)?),
        })
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            AnyModel::Linear(_) => ModelKind::Linear,
            AnyModel::Power(_) => ModelKind::Power,
        }
    }

    /// Record identifier of the wrapped family.
    pub fn name(&self) -> &'static str {
        match self {
            AnyModel::Linear(_) => SimpleLinear::NAME,
            AnyModel::Power(_) => Power::NAME,
        }
    }

    /// Whether every fitted parameter is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            AnyModel::Linear(m) => m.is_finite(),
            AnyModel::Power(m) => m.is_finite(),
        }
    }

    pub fn get_y(&self, x: f64) -> f64 {
        match self {
            AnyModel::Linear(m) => m.get_y(x),
            AnyModel::Power(m) => m.get_y(x),
        }
    }

    pub fn get_x(&self, y: f64) -> f64 {
        match self {
            AnyModel::Linear(m) => m.get_x(y),
            AnyModel::Power(m) => m.get_x(y),
        }
    }

    pub fn predict<'a>(&self, x: impl Into<Samples<'a>>) -> Vec<f64> {
        match self {
            AnyModel::Linear(m) => m.predict(x),
            AnyModel::Power(m) => m.predict(x),
        }
    }

    pub fn score<'a>(&self, x: impl Into<Samples<'a>>, y: impl Into<Samples<'a>>) -> Result<Score> {
        match self {
            AnyModel::Linear(m) => m.score(x, y),
            AnyModel::Power(m) => m.score(x, y),
        }
    }

    pub fn equation(&self, precision: Option<u32>) -> String {
        match self {
            AnyModel::Linear(m) => m.equation(precision),
            AnyModel::Power(m) => m.equation(precision),
        }
    }

    /// The family record as a JSON value (field order preserved when encoded).
    pub fn to_value(&self) -> Result<Value> {
        ensure_finite(self.name(), self.is_finite())?;
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        match self {
            AnyModel::Linear(m) => m.to_json(),
            AnyModel::Power(m) => m.to_json(),
        }
    }

    /// Decode any known record, dispatching on its `name` tag.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        if name == SimpleLinear::NAME {
            let record = serde_json::from_value(value)?;
            Ok(AnyModel::Linear(SimpleLinear::from_record(record)?))
        } else if name == Power::NAME {
            let record = serde_json::from_value(value)?;
            Ok(AnyModel::Power(Power::from_record(record)?))
        } else {
            Err(FitError::TypeMismatch {
                expected: format!("one of {}, {}", SimpleLinear::NAME, Power::NAME),
                found: name,
            })
        }
    }
}

impl Serialize for AnyModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            AnyModel::Linear(m) => m.to_record().serialize(serializer),
            AnyModel::Power(m) => m.to_record().serialize(serializer),
        }
    }
}

impl From<SimpleLinear> for AnyModel {
    fn from(model: SimpleLinear) -> Self {
        AnyModel::Linear(model)
    }
}

impl From<Power> for AnyModel {
    fn from(model: Power) -> Self {
        AnyModel::Power(model)
    }
}
