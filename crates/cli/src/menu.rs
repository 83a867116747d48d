//! Interactive menu loop
//!
//! Dispatches between single prediction, batch prediction, and exit. No
//! error escapes this loop; every failure is rendered and the menu
//! continues.

use crate::output;
use crate::prompt::{self, StdinSource};
use admission_lib::{report, Band, BatchError, BatchRunner, FeatureVectorBuilder, PredictionService};
use std::path::Path;

const DIVIDER_WIDTH: usize = 60;

fn divider() -> String {
    "=".repeat(DIVIDER_WIDTH)
}

fn print_menu() {
    println!("\n{}", divider());
    println!("📋 MAIN MENU");
    println!("{}", divider());
    println!("1. Single prediction");
    println!("2. Batch prediction (CSV)");
    println!("3. Exit");
}

/// Drive the menu until the user exits or closes the input stream.
pub fn run(service: &PredictionService) {
    println!("\n{}", divider());
    println!("🎓 UNIVERSITY ADMISSION PREDICTOR");
    println!("{}", divider());

    loop {
        print_menu();
        prompt::show("\nChoose an option (1-3): ");
        let choice = match prompt::read_line() {
            Ok(Some(line)) => line.trim().to_string(),
            Ok(None) | Err(_) => {
                println!("\n👋 Goodbye!");
                return;
            }
        };
        match choice.as_str() {
            "1" => single_prediction(service),
            "2" => batch_prediction(service),
            "3" => {
                println!("\n👋 Thanks for using the predictor. Goodbye!");
                return;
            }
            _ => output::print_error("Invalid option! Choose 1, 2 or 3."),
        }
    }
}

fn single_prediction(service: &PredictionService) {
    println!("\nPlease provide the following information:");
    println!("(press Enter to accept the default value)\n");

    let mut source = StdinSource;
    let Some(vector) = FeatureVectorBuilder::build(&mut source) else {
        output::print_warning("Operation cancelled.");
        return;
    };

    println!("\n🔄 Generating prediction...");
    match service.predict_one(&vector) {
        Ok(probability) => {
            println!("\n{}", divider());
            println!("📊 PREDICTION RESULT");
            println!("{}", divider());
            println!("\n{}", report::format_single(&vector, probability));
            // Repeat the band colorized so it stands out on a long report
            println!("{}", output::color_band(Band::from_probability(probability)));
        }
        Err(error) => output::print_error(&format!("Prediction failed: {error}")),
    }
}

fn batch_prediction(service: &PredictionService) {
    prompt::show("\nCSV file path: ");
    let path = match prompt::read_line() {
        Ok(Some(line)) => line.trim().to_string(),
        Ok(None) | Err(_) => {
            output::print_warning("Operation cancelled.");
            return;
        }
    };
    if path.is_empty() || !Path::new(&path).exists() {
        output::print_error("File not found!");
        return;
    }

    println!("\n🔄 Processing CSV file: {path}");
    match BatchRunner::new(service).run(Path::new(&path)) {
        Ok(report) => {
            output::print_success(&format!("{} records processed", report.rows));
            output::print_success(&format!("Results saved to: {}", report.output_path.display()));
            output::print_summary(&report.summary);
        }
        Err(BatchError::MissingColumns(missing)) => {
            output::print_error("CSV file is missing required columns:");
            for name in missing {
                println!("   • {name}");
            }
        }
        Err(error) => output::print_error(&format!("Failed to process CSV: {error}")),
    }
}
