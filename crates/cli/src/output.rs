//! Console output helpers

use admission_lib::report::format_percent;
use admission_lib::{Band, BatchSummary};
use colored::Colorize;

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Color a band label by its tier
pub fn color_band(band: Band) -> String {
    let label = band.label();
    match band {
        Band::High => label.green().to_string(),
        Band::Medium | Band::Low => label.yellow().to_string(),
        Band::VeryLow => label.red().to_string(),
    }
}

/// Render the batch summary block
pub fn print_summary(summary: &BatchSummary) {
    println!("\n📊 Prediction summary:");
    println!("   • Mean chance of admission: {}", format_percent(summary.mean));
    println!("   • Highest chance: {}", format_percent(summary.max));
    println!("   • Lowest chance: {}", format_percent(summary.min));
}
