/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::validator::error::{convert_jsonschema_error, ValidationError, ValidationResult};

/// Check `data` against `schema`, then run `additional_validation` and
/// merge both error lists.
pub fn validate_with_schema<F>(
    schema: &Value,
    file_path: &str,
    data: &Value,
    additional_validation: F,
) -> ValidationResult
where
    F: FnOnce(&str, &Value) -> Vec<ValidationError>,
{
    let compiled = match JSONSchema::compile(schema) {
        Ok(compiled) => compiled,
        Err(err) => {
            return ValidationResult::invalid(vec![ValidationError {
                file: file_path.to_string(),
                line: None,
                column: None,
                message: format!("Failed to compile schema: {err}"),
                path: None,
                suggestion: None,
            }]);
        }
    };

    let mut errors: Vec<ValidationError> = match compiled.validate(data) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|error| convert_jsonschema_error(file_path, &error))
            .collect(),
    };
    errors.extend(additional_validation(file_path, data));

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}
