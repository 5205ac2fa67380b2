//! Command-line parsing for the `fc` curve fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ModelSpec;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fc", version, about = "Closed-form curve fitter (linear and power regression)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit observations from a CSV, print diagnostics and optionally export the model.
    Fit(FitArgs),
    /// Evaluate a saved model at the given values.
    Predict(PredictArgs),
    /// Score a saved model against observations from a CSV.
    Score(ScoreArgs),
    /// Print a saved model's equation and record.
    Show(ShowArgs),
    /// Generate synthetic observations from a saved model.
    Sample(SampleArgs),
    /// Plot a saved model, optionally over observations.
    Plot(PlotArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// CSV with `x` and `y` columns.
    #[arg(short = 'd', long, value_name = "CSV")]
    pub data: PathBuf,

    /// Which family to fit (`auto` picks the best r2).
    #[arg(short = 'm', long, value_enum, default_value_t = ModelSpec::Auto)]
    pub model: ModelSpec,

    /// Decimal places for displayed values (defaults to FC_PRECISION).
    #[arg(short = 'p', long)]
    pub precision: Option<u32>,

    /// Export the fitted model to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export per-observation residuals to CSV.
    #[arg(long = "export-residuals", value_name = "CSV")]
    pub export_residuals: Option<PathBuf>,

    /// Show the N largest residuals.
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

/// Options for prediction.
#[derive(Debug, Parser)]
pub struct PredictArgs {
    /// Model JSON produced by `fc fit --export`.
    #[arg(long, value_name = "JSON")]
    pub model: PathBuf,

    /// Invert the model (values are y, output is x).
    #[arg(long)]
    pub inverse: bool,

    /// Decimal places for output (full precision when omitted).
    #[arg(short = 'p', long)]
    pub precision: Option<u32>,

    /// Input values.
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

/// Options for scoring.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Model JSON produced by `fc fit --export`.
    #[arg(long, value_name = "JSON")]
    pub model: PathBuf,

    /// CSV with `x` and `y` columns.
    #[arg(short = 'd', long, value_name = "CSV")]
    pub data: PathBuf,

    /// Decimal places (defaults to FC_PRECISION).
    #[arg(short = 'p', long)]
    pub precision: Option<u32>,
}

/// Options for showing a model.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Model JSON produced by `fc fit --export`.
    #[arg(long, value_name = "JSON")]
    pub model: PathBuf,

    /// Decimal places for the equation (defaults to FC_PRECISION).
    #[arg(short = 'p', long)]
    pub precision: Option<u32>,
}

/// Options for synthetic sample generation.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Model JSON produced by `fc fit --export`.
    #[arg(long, value_name = "JSON")]
    pub model: PathBuf,

    /// Number of observations.
    #[arg(short = 'n', long, default_value_t = 50)]
    pub count: usize,

    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub x_min: f64,

    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Standard deviation of additive Gaussian noise.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Write the CSV here instead of stdout.
    #[arg(short = 'o', long, value_name = "CSV")]
    pub out: Option<PathBuf>,
}

/// Options for plotting a saved model.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Model JSON produced by `fc fit --export`.
    #[arg(long, value_name = "JSON")]
    pub model: PathBuf,

    /// Overlay observations from this CSV.
    #[arg(short = 'd', long, value_name = "CSV")]
    pub data: Option<PathBuf>,

    /// Plot range when no data is given.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x_min: f64,

    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fit_defaults() {
        let cli = Cli::try_parse_from(["fc", "fit", "--data", "obs.csv"]).unwrap();
        match cli.command {
            Command::Fit(args) => {
                assert_eq!(args.model, ModelSpec::Auto);
                assert_eq!(args.precision, None);
                assert!(!args.no_plot);
            }
            other => panic!("expected fit, got {other:?}"),
        }
    }

    #[test]
    fn predict_accepts_negative_values() {
        let cli = Cli::try_parse_from(["fc", "predict", "--model", "m.json", "-1.5", "2"]).unwrap();
        match cli.command {
            Command::Predict(args) => assert_eq!(args.values, vec![-1.5, 2.0]),
            other => panic!("expected predict, got {other:?}"),
        }
    }

    #[test]
    fn model_spec_values() {
        let cli = Cli::try_parse_from(["fc", "fit", "-d", "obs.csv", "-m", "power"]).unwrap();
        assert!(matches!(cli.command, Command::Fit(FitArgs { model: ModelSpec::Power, .. })));
    }
}
