//! Interactive stdin prompting

use admission_lib::report::format_field_value;
use admission_lib::{FieldSpec, InputSource, PromptReply, ValidationError};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Read one line from stdin. `None` means end of input (Ctrl-D), which is
/// treated as user cancellation everywhere in the tool.
pub fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Print `text` without a newline and flush, so the cursor waits on the
/// same line as the prompt
pub fn show(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

/// Field input source backed by stdin prompts
pub struct StdinSource;

impl InputSource for StdinSource {
    fn prompt(&mut self, field: &FieldSpec) -> PromptReply {
        show(&format!("{} ({}-{}): ", field.name, field.min, field.max));
        match read_line() {
            Ok(Some(line)) => PromptReply::Entered(line),
            Ok(None) | Err(_) => PromptReply::Cancelled,
        }
    }

    fn report_invalid(&mut self, field: &FieldSpec, error: &ValidationError) {
        println!("{} {} {}", "✗".red().bold(), field.name, error);
    }

    fn report_default(&mut self, field: &FieldSpec, value: f64) {
        println!("   → Using default value: {}", format_field_value(field.display, value));
    }
}
