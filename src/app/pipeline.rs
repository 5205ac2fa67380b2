//! Shared "fit pipeline" logic.
//!
//! Keeping this in one place keeps the core workflow reusable outside the CLI:
//! CSV ingest -> fit/select -> residuals

use std::path::Path;

use crate::domain::ModelSpec;
use crate::error::AppError;
use crate::fit::{FitSelection, fit_and_select};
use crate::io::{IngestedData, load_observations};
use crate::report::{Residual, compute_residuals};

/// All computed outputs of a single `fc fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub selection: FitSelection,
    pub residuals: Vec<Residual>,
}

/// Execute the full fitting pipeline on a CSV file.
pub fn run_fit(data: &Path, spec: ModelSpec) -> Result<RunOutput, AppError> {
    let ingest = load_observations(data)?;
    run_fit_with_data(ingest, spec)
}

/// Execute the fitting pipeline on already ingested observations.
pub fn run_fit_with_data(ingest: IngestedData, spec: ModelSpec) -> Result<RunOutput, AppError> {
    let selection = fit_and_select(&ingest.x, &ingest.y, spec)?;
    let residuals = compute_residuals(&ingest.x, &ingest.y, &selection.best.model)?;

    Ok(RunOutput {
        ingest,
        selection,
        residuals,
    })
}
