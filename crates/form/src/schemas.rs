/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use serde_json::Value;

/// Form definition schema, embedded at compile time.
const DEFINITION_SCHEMA_JSON: &str = include_str!("../schemas/form-definition.schema.v1.json");

/// Load the form definition schema.
///
/// # Panics
///
/// Panics if the embedded schema JSON is invalid.
#[must_use]
pub fn load_definition_schema() -> Value {
    serde_json::from_str(DEFINITION_SCHEMA_JSON)
        .expect("Failed to parse embedded form definition schema")
}
