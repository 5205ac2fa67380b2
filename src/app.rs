//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads settings and installs logging
//! - parses CLI arguments
//! - runs fitting, prediction, scoring and sampling
//! - prints reports/plots
//! - writes optional exports

use std::fs::File;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{Command, FitArgs, PlotArgs, PredictArgs, SampleArgs, ScoreArgs, ShowArgs};
use crate::config::Settings;
use crate::data::{SampleConfig, generate_sample};
use crate::error::AppError;
use crate::io::{load_observations, read_model_json, write_model_json, write_observations_csv, write_residuals_csv};
use crate::math::format_number;
use crate::plot::{render_ascii_plot, render_model_plot};
use crate::report::{format_fit_summary, format_residuals, format_score, largest_residuals};

pub mod pipeline;

/// Entry point for the `fc` binary.
pub fn run() -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    init_tracing(&settings);

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Fit(args) => handle_fit(args, &settings),
        Command::Predict(args) => handle_predict(args),
        Command::Score(args) => handle_score(args, &settings),
        Command::Show(args) => handle_show(args, &settings),
        Command::Sample(args) => handle_sample(args),
        Command::Plot(args) => handle_plot(args),
    }
}

/// Log to stderr; `RUST_LOG` wins over the configured default filter.
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    // A subscriber may already be installed (e.g. when embedded); keep it.
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn handle_fit(args: FitArgs, settings: &Settings) -> Result<(), AppError> {
    let precision = Some(args.precision.unwrap_or(settings.precision));
    let run = pipeline::run_fit(&args.data, args.model)?;

    println!("{}", format_fit_summary(&run.ingest, &run.selection, precision));

    if args.top > 0 {
        let top = largest_residuals(&run.residuals, args.top);
        println!("{}", format_residuals("Largest residuals", &top, precision));
    }

    if !args.no_plot {
        let plot = render_ascii_plot(
            &run.ingest.x,
            &run.ingest.y,
            &run.selection.best.model,
            args.width,
            args.height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &args.export {
        write_model_json(path, &run.selection.best.model)?;
    }
    if let Some(path) = &args.export_residuals {
        write_residuals_csv(path, &run.residuals)?;
    }

    Ok(())
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let model = read_model_json(&args.model)?;

    let outputs: Vec<f64> = if args.inverse {
        args.values.iter().map(|&v| model.get_x(v)).collect()
    } else {
        model.predict(&args.values)
    };

    for (input, output) in args.values.iter().zip(outputs) {
        println!("{input},{}", format_number(output, args.precision));
    }
    Ok(())
}

fn handle_score(args: ScoreArgs, settings: &Settings) -> Result<(), AppError> {
    let precision = Some(args.precision.unwrap_or(settings.precision));
    let model = read_model_json(&args.model)?;
    let ingest = load_observations(&args.data)?;

    let score = model.score(&ingest.x, &ingest.y)?;
    println!("{}", model.equation(precision));
    print!("{}", format_score(&score, precision));
    Ok(())
}

fn handle_show(args: ShowArgs, settings: &Settings) -> Result<(), AppError> {
    let precision = Some(args.precision.unwrap_or(settings.precision));
    let model = read_model_json(&args.model)?;

    let record = serde_json::to_string_pretty(&model)
        .map_err(|e| AppError::new(2, format!("Failed to encode model record: {e}")))?;
    println!("{}", model.equation(precision));
    println!("{record}");
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let model = read_model_json(&args.model)?;
    let config = SampleConfig {
        count: args.count,
        x_min: args.x_min,
        x_max: args.x_max,
        noise: args.noise,
        seed: args.seed,
    };
    let sample = generate_sample(&model, &config)?;

    match &args.out {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| AppError::new(2, format!("Failed to create sample CSV '{}': {e}", path.display())))?;
            write_observations_csv(file, &sample.x, &sample.y)
        }
        None => write_observations_csv(std::io::stdout().lock(), &sample.x, &sample.y),
    }
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let model = read_model_json(&args.model)?;

    let plot = match &args.data {
        Some(path) => {
            let ingest = load_observations(path)?;
            render_ascii_plot(&ingest.x, &ingest.y, &model, args.width, args.height)
        }
        None => render_model_plot(&model, args.x_min, args.x_max, args.width, args.height),
    };

    println!("{plot}");
    Ok(())
}
