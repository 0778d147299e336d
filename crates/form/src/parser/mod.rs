/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Reads form definition documents from YAML or JSON strings.
 * Works only with in-memory data (no file I/O).
 */

pub mod error;
pub mod utils;

use serde_json::Value;

use crate::parser::error::ParseError;
use crate::parser::utils::parse_yaml_or_json;

/// Parse a form definition document into a JSON value.
///
/// Only the document's shape is checked here: it must be a mapping whose
/// `controls` member, when present, is a list. Per-control checks belong to
/// the validator.
pub fn parse_definition_document(content: &str, file_path: Option<&str>) -> Result<Value, ParseError> {
    let value = parse_yaml_or_json(content, file_path)?;

    let obj = value.as_object().ok_or_else(|| {
        ParseError::InvalidFieldType("Form definition must be a mapping".to_string())
    })?;

    match obj.get("controls") {
        None => return Err(ParseError::MissingField("controls".to_string())),
        Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(ParseError::InvalidFieldType(
                "'controls' must be a list".to_string(),
            ))
        }
    }

    Ok(value)
}
