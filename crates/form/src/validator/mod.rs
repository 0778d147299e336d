/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

pub mod common;
pub mod definition;
pub mod error;

#[cfg(test)]
mod tests;

use serde_json::Value;

use crate::schemas;
use crate::validator::definition::validate_definition as validate_definition_impl;
use crate::validator::error::{ValidationError, ValidationResult};

/// Validates form definition documents against the embedded schema and the
/// per-control rules.
pub struct Validator {
    definition_schema: Value,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            definition_schema: schemas::load_definition_schema(),
        }
    }

    /// Validator using a caller supplied schema.
    pub fn with_schema(definition_schema: Value) -> Self {
        Self { definition_schema }
    }

    pub fn validate_definition(&self, file_path: &str, data: &Value) -> ValidationResult {
        validate_definition_impl(&self.definition_schema, file_path, data)
    }

    /// Format validation errors for display.
    pub fn format_errors(&self, errors: &[ValidationError]) -> String {
        if errors.is_empty() {
            return String::new();
        }

        let mut lines = vec!["✗ Validation failed\n".to_string()];
        for error in errors {
            lines.push(format_error_location(error));
            lines.push(format!("  Error: {}", error.message));
            if let Some(path) = &error.path {
                lines.push(format!("  Path: {path}"));
            }
            if let Some(suggestion) = &error.suggestion {
                lines.push(format!("  Suggestion: {suggestion}"));
            }
            lines.push(String::new());
        }
        lines.join("\n")
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn format_error_location(error: &ValidationError) -> String {
    match error.line {
        Some(line) => {
            let column = error.column.map(|c| format!(":{c}")).unwrap_or_default();
            format!("{}:{line}{column}", error.file)
        }
        None => error.file.clone(),
    }
}
