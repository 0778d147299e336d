/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Checks on form definitions that the schema cannot express.
 */

use serde_json::Value;

use crate::rules::Rule;
use crate::validator::common::validate_with_schema;
use crate::validator::error::{ValidationError, ValidationResult};

pub fn validate_definition(schema: &Value, file_path: &str, data: &Value) -> ValidationResult {
    validate_with_schema(schema, file_path, data, validate_controls)
}

/// Per-control checks: rule patterns compile, `min <= max` when both are
/// set, and buttons carry a label.
fn validate_controls(file_path: &str, data: &Value) -> Vec<ValidationError> {
    let Some(controls) = data.get("controls").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut errors = Vec::new();
    for (index, control) in controls.iter().enumerate() {
        let base = format!("/controls/{index}");

        if let Some(rules) = control.get("rules").and_then(Value::as_array) {
            for (rule_index, rule) in rules.iter().enumerate() {
                let Some(rule) = rule.as_str() else { continue };
                if let Err(err) = Rule::parse(rule) {
                    errors.push(
                        ValidationError::at(file_path, format!("{base}/rules/{rule_index}"), err.to_string())
                            .with_suggestion(
                                "Use a built-in rule (not_empty, integer, numeric, url, email) or a valid regular expression",
                            ),
                    );
                }
            }
        }

        let min = control.get("min").and_then(Value::as_u64).unwrap_or(0);
        let max = control.get("max").and_then(Value::as_u64).unwrap_or(0);
        if min > 0 && max > 0 && min > max {
            errors.push(ValidationError::at(
                file_path,
                format!("{base}/min"),
                format!("min ({min}) is greater than max ({max})"),
            ));
        }

        let is_button = control.get("type").and_then(Value::as_str) == Some("button");
        let label = control.get("label").and_then(Value::as_str).unwrap_or_default();
        if is_button && label.trim().is_empty() {
            errors.push(
                ValidationError::at(file_path, format!("{base}/label"), "Button has no label")
                    .with_suggestion("Add a 'label' to the button"),
            );
        }
    }
    errors
}
