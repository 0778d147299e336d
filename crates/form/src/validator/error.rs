/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use jsonschema::error::ValidationErrorKind;
use serde::{Deserialize, Serialize};

/// One problem found in a definition file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationError {
    pub file: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub message: String,
    /// JSON pointer to the offending member.
    pub path: Option<String>,
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Error at `path` without position information.
    pub fn at(file: &str, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.to_string(),
            line: None,
            column: None,
            message: message.into(),
            path: Some(path.into()),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Convert a `jsonschema` error.
///
/// `jsonschema` reports instance paths but no source positions, so `line`
/// and `column` are always `None`.
pub fn convert_jsonschema_error(
    file_path: &str,
    error: &jsonschema::ValidationError,
) -> ValidationError {
    let instance_path = error.instance_path.to_string();

    ValidationError {
        file: file_path.to_string(),
        line: None,
        column: None,
        message: error.to_string(),
        path: if instance_path.is_empty() {
            None
        } else {
            Some(instance_path)
        },
        suggestion: suggestion_for(&error.kind),
    }
}

fn suggestion_for(kind: &ValidationErrorKind) -> Option<String> {
    match kind {
        ValidationErrorKind::Required { property } => {
            Some(format!("Add missing required field {property}"))
        }
        ValidationErrorKind::Type { .. } => {
            Some("Check the field type matches the schema".to_string())
        }
        ValidationErrorKind::Enum { .. } => Some("Check allowed values in the schema".to_string()),
        ValidationErrorKind::MinLength { .. } => Some("Value must not be empty".to_string()),
        _ => None,
    }
}
