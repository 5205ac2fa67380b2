//! Family selection (linear vs power) by coefficient of determination.
//!
//! Selection rules:
//! 1. Skip a family whose parameters or `r2` are not finite (e.g. a power fit
//!    on non-positive data)
//! 2. Choose the family with the highest training `r2`
//! 3. On an exact tie, keep the simpler family (`linear` is listed first)

use rayon::prelude::*;
use tracing::debug;

use crate::domain::{ModelKind, ModelSpec, Score};
use crate::error::{AppError, FitError};
use crate::models::{AnyModel, validate_pair};

/// A fitted family together with its training score.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub model: AnyModel,
    pub score: Score,
}

/// Output of fitting + selection.
#[derive(Debug, Clone)]
pub struct FitSelection {
    pub best: Candidate,
    /// Fits for all attempted families that passed the guardrails.
    pub fits: Vec<Candidate>,
    /// Families that were skipped and why (for diagnostics).
    pub skipped: Vec<(ModelKind, String)>,
}

/// Fit the requested families and select the best one.
pub fn fit_and_select(x: &[f64], y: &[f64], spec: ModelSpec) -> Result<FitSelection, AppError> {
    validate_pair(x, y)?;

    let outcomes: Vec<(ModelKind, Result<Candidate, Skip>)> = spec
        .kinds()
        .into_par_iter()
        .map(|kind| (kind, fit_candidate(kind, x, y)))
        .collect();

    let mut fits = Vec::new();
    let mut skipped = Vec::new();
    let mut all_numeric = true;
    for (kind, outcome) in outcomes {
        match outcome {
            Ok(candidate) => fits.push(candidate),
            Err(skip) => {
                debug!(%kind, reason = %skip.reason, "skipping family");
                all_numeric &= skip.numeric;
                skipped.push((kind, skip.reason));
            }
        }
    }

    let best = select_by_r2(&fits).ok_or_else(|| {
        let reasons: Vec<String> = skipped.iter().map(|(k, r)| format!("{k}: {r}")).collect();
        AppError::new(
            if all_numeric { 4 } else { 3 },
            format!("No family could be fitted to the data ({}).", reasons.join("; ")),
        )
    })?;
    debug!(kind = %best.model.kind(), r2 = best.score.r2(None), "selected family");

    Ok(FitSelection {
        best,
        fits,
        skipped,
    })
}

/// Why a family was left out. `numeric` marks non-finite results as opposed
/// to data errors.
struct Skip {
    reason: String,
    numeric: bool,
}

impl Skip {
    fn numeric(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            numeric: true,
        }
    }
}

impl From<FitError> for Skip {
    fn from(err: FitError) -> Self {
        Self {
            reason: err.to_string(),
            numeric: false,
        }
    }
}

fn fit_candidate(kind: ModelKind, x: &[f64], y: &[f64]) -> Result<Candidate, Skip> {
    let model = AnyModel::fit(kind, x, y)?;
    if !model.is_finite() {
        return Err(Skip::numeric("non-finite parameters (check the input domain)"));
    }
    let score = model.score(x, y)?;
    if !score.r2(None).is_finite() {
        return Err(Skip::numeric("non-finite r2"));
    }
    Ok(Candidate { model, score })
}

fn select_by_r2(fits: &[Candidate]) -> Option<Candidate> {
    let mut best: Option<&Candidate> = None;
    for candidate in fits {
        match best {
            Some(b) if candidate.score.r2(None) <= b.score.r2(None) => {}
            _ => best = Some(candidate),
        }
    }
    best.cloned()
}
