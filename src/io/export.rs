//! Export per-observation residuals to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::error::AppError;
use crate::report::Residual;

/// Write per-observation residuals to a CSV file.
pub fn write_residuals_csv(path: &Path, residuals: &[Residual]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(["x", "y_obs", "y_fit", "residual"])
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for r in residuals {
        writer
            .write_record([
                format!("{}", r.x),
                format!("{}", r.y_obs),
                format!("{:.10}", r.y_fit),
                format!("{:.10}", r.residual),
            ])
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;

    info!(path = %path.display(), rows = residuals.len(), "wrote residuals");
    Ok(())
}

/// Write observations as an `x,y` CSV (readable by `ingest`).
pub fn write_observations_csv<W: std::io::Write>(out: W, x: &[f64], y: &[f64]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["x", "y"])
        .map_err(|e| AppError::new(2, format!("Failed to write CSV header: {e}")))?;
    for (xi, yi) in x.iter().zip(y) {
        writer
            .write_record([xi.to_string(), yi.to_string()])
            .map_err(|e| AppError::new(2, format!("Failed to write CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush CSV: {e}")))?;
    Ok(())
}
