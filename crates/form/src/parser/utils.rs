/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * YAML and JSON decoding helpers.
 */

use serde_json::{Map, Number, Value};
use yaml_rust::{Yaml, YamlLoader};

use crate::parser::error::ParseError;

/// Parse YAML or JSON content.
///
/// A `.json`, `.yaml` or `.yml` extension on `file_path` picks the format;
/// otherwise JSON is tried first, then YAML.
pub fn parse_yaml_or_json(content: &str, file_path: Option<&str>) -> Result<Value, ParseError> {
    if let Some(path) = file_path {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            return parse_json(content).map_err(ParseError::InvalidJson);
        }
        if path_lower.ends_with(".yaml") || path_lower.ends_with(".yml") {
            return parse_yaml(content).map_err(ParseError::InvalidYaml);
        }
    }

    match parse_json(content) {
        Ok(value) => Ok(value),
        Err(_) => parse_yaml(content).map_err(ParseError::InvalidYaml),
    }
}

fn parse_json(content: &str) -> Result<Value, String> {
    serde_json::from_str(content).map_err(|e| format!("JSON parse error: {e}"))
}

/// Parse the first YAML document.
fn parse_yaml(content: &str) -> Result<Value, String> {
    let docs = YamlLoader::load_from_str(content).map_err(|e| format!("YAML parse error: {e}"))?;
    let first = docs
        .first()
        .ok_or_else(|| "YAML document is empty".to_string())?;
    yaml_to_json_value(first).ok_or_else(|| "Failed to convert YAML to JSON value".to_string())
}

/// Convert a `yaml-rust` node. Aliases and bad values have no JSON form;
/// inside collections they are dropped.
pub fn yaml_to_json_value(yaml: &Yaml) -> Option<Value> {
    match yaml {
        Yaml::Real(s) => Some(
            s.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map_or_else(|| Value::String(s.clone()), Value::Number),
        ),
        Yaml::Integer(i) => Some(Value::from(*i)),
        Yaml::String(s) => Some(Value::String(s.clone())),
        Yaml::Boolean(b) => Some(Value::Bool(*b)),
        Yaml::Array(items) => Some(Value::Array(
            items.iter().filter_map(yaml_to_json_value).collect(),
        )),
        Yaml::Hash(hash) => {
            let map: Map<String, Value> = hash
                .iter()
                .filter_map(|(k, v)| Some((yaml_key(k)?, yaml_to_json_value(v)?)))
                .collect();
            Some(Value::Object(map))
        }
        Yaml::Null => Some(Value::Null),
        Yaml::BadValue | Yaml::Alias(_) => None,
    }
}

/// Mapping keys become strings; `1: One` keys an option by `"1"`.
fn yaml_key(yaml: &Yaml) -> Option<String> {
    match yaml {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
