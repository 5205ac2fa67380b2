//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - model selection enums (`ModelKind`, `ModelSpec`)
//! - scalar-or-sequence inputs (`Samples`)
//! - fit-quality statistics (`Score`)
//! - dataset summaries (`DatasetStats`)

pub mod score;
pub mod types;

pub use score::*;
pub use types::*;
