//! Validate command implementation

use crate::error::{CliError, CliResult};
use formkit::{parse_definition_value, Validator};
use std::fs;

pub struct Options {
    pub definition: String,
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(true) => {
            println!("✓ {} is valid", options.definition);
            0
        }
        Ok(false) => 1,
        Err(e) => {
            eprintln!("✗ Validation failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<bool> {
    let content = fs::read_to_string(&options.definition).map_err(|e| {
        CliError::Message(format!("Failed to read {}: {e}", options.definition))
    })?;
    let data = parse_definition_value(&content, Some(&options.definition))?;

    let validator = Validator::new();
    let result = validator.validate_definition(&options.definition, &data);
    if !result.valid {
        eprintln!("{}", validator.format_errors(&result.errors));
    }
    tracing::debug!(
        "Checked {} with {} errors",
        options.definition,
        result.errors.len()
    );
    Ok(result.valid)
}
