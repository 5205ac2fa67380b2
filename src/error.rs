//! Error types.
//!
//! - `FitError`: typed failures raised by the fitting/scoring library code
//! - `AppError`: what the `fc` binary reports, carrying a process exit code
//!
//! Exit codes used by the binary:
//! - `2`: input, IO, configuration or record format problems
//! - `3`: insufficient or mismatched data
//! - `4`: numerical failures

use thiserror::Error;

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, FitError>;

/// Errors raised while fitting, scoring or (de)serializing a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// The observation set is empty.
    #[error("No observations to fit or score")]
    NoData,

    /// `x` and `y` have different lengths.
    #[error("Dimension mismatch: {x_len} x-values but {y_len} y-values")]
    DimensionMismatch { x_len: usize, y_len: usize },

    /// A record's `name` tag does not match the family reading it.
    #[error("Type mismatch: expected record for {expected}, found '{found}'")]
    TypeMismatch { expected: String, found: String },

    /// A statistic name that `Score` does not define.
    #[error("Invalid property '{name}' for {type_name}")]
    InvalidProperty { name: String, type_name: &'static str },

    /// The textual record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FitError {
    fn from(err: serde_json::Error) -> Self {
        FitError::Serialization(err.to_string())
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        let exit_code = match err {
            FitError::NoData | FitError::DimensionMismatch { .. } => 3,
            FitError::TypeMismatch { .. }
            | FitError::InvalidProperty { .. }
            | FitError::Serialization(_) => 2,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
