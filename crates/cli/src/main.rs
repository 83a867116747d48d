//! Admission Predictor CLI
//!
//! Interactive tool that loads the pre-trained admission model and estimates
//! the admission probability for one applicant at a time or for a CSV batch.

mod config;
mod menu;
mod output;
mod prompt;

use admission_lib::{OnnxModel, PredictionService};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Admission Predictor CLI
#[derive(Parser)]
#[command(name = "admit")]
#[command(author, version, about = "University admission probability predictor", long_about = None)]
struct Cli {
    /// Path to the trained ONNX model (overrides ADMIT_MODEL_PATH and the
    /// default relative path)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Keep the interactive session clean unless asked otherwise
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer())
        .init();

    let settings = match config::Settings::load() {
        Ok(settings) => settings,
        Err(error) => {
            output::print_error(&format!("Invalid configuration: {error:#}"));
            return ExitCode::FAILURE;
        }
    };
    let model_path = cli
        .model
        .unwrap_or_else(|| PathBuf::from(&settings.model_path));
    info!(model = %model_path.display(), "starting admission predictor");

    // A missing model is the one fatal startup condition: no menu is shown.
    if !model_path.exists() {
        output::print_error(&format!("Model file '{}' not found!", model_path.display()));
        output::print_info("Make sure the trained model is in the working directory.");
        return ExitCode::FAILURE;
    }

    println!("🔄 Loading pre-trained model...");
    let model = match OnnxModel::load(&model_path) {
        Ok(model) => model,
        Err(error) => {
            output::print_error(&format!("Failed to load model: {error}"));
            return ExitCode::FAILURE;
        }
    };
    output::print_success("Model loaded successfully!");

    let service = PredictionService::new(Arc::new(model));
    menu::run(&service);
    ExitCode::SUCCESS
}
