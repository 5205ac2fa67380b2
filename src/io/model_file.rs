//! Read/write model JSON files.
//!
//! A model file is exactly one family record (see `SimpleLinearRecord` and
//! `PowerRecord`), pretty-printed. Reading dispatches on the `name` tag.

use std::fs::File;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::AppError;
use crate::models::AnyModel;

/// Write a model JSON file.
pub fn write_model_json(path: &Path, model: &AnyModel) -> Result<(), AppError> {
    if !model.is_finite() {
        return Err(AppError::new(4, "Model has non-finite parameters; nothing written."));
    }
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create model JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, model)
        .map_err(|e| AppError::new(2, format!("Failed to write model JSON: {e}")))?;

    info!(path = %path.display(), name = model.name(), "wrote model");
    Ok(())
}

/// Read a model JSON file.
pub fn read_model_json(path: &Path) -> Result<AnyModel, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open model JSON '{}': {e}", path.display())))?;
    let value: Value =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid model JSON: {e}")))?;
    Ok(AnyModel::from_value(value)?)
}
