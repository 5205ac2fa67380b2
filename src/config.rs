//! Environment configuration.
//!
//! Settings are read once at startup. An optional `.env` file in the working
//! directory is loaded first (via `dotenvy`), so either source works:
//!
//! - `FC_PRECISION`: default display precision for reports (default `4`)
//! - `FC_LOG`: default log filter when `RUST_LOG` is unset (default `warn`)

use crate::error::AppError;

pub const DEFAULT_PRECISION: u32 = 4;
pub const DEFAULT_LOG: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub precision: u32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            log_filter: DEFAULT_LOG.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut settings = Self::default();

        if let Some(raw) = lookup("FC_PRECISION") {
            settings.precision = raw
                .trim()
                .parse()
                .map_err(|_| AppError::new(2, format!("Invalid FC_PRECISION '{raw}': expected a non-negative integer.")))?;
        }
        if let Some(raw) = lookup("FC_LOG") {
            let raw = raw.trim();
            if !raw.is_empty() {
                settings.log_filter = raw.to_string();
            }
        }

        Ok(settings)
    }
}
