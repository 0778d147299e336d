/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use super::*;
use serde_json::json;

#[test]
fn test_valid_definition() {
    let validator = Validator::new();
    let data = json!({
        "action": "/save",
        "controls": [
            {"type": "hidden", "key": "id"},
            {"type": "text", "key": "name", "label": "Name", "rules": ["not_empty", "[a-z]+"], "min": 1, "max": 10},
            {"type": "select", "key": "grade", "options": {"1": "A"}},
            {"type": "button", "label": "Save", "primary": true},
            {"type": "html", "html": "<hr/>"}
        ]
    });
    let result = validator.validate_definition("form.yaml", &data);
    assert!(result.valid, "unexpected errors: {:?}", result.errors);
}

#[test]
fn test_missing_controls() {
    let result = Validator::new().validate_definition("form.yaml", &json!({"action": "/x"}));
    assert!(!result.valid);
    assert!(result.errors[0].message.contains("controls"));
    assert!(result.errors[0].suggestion.is_some());
}

#[test]
fn test_unknown_control_type() {
    let data = json!({"controls": [{"type": "slider", "key": "x"}]});
    let result = Validator::new().validate_definition("form.yaml", &data);
    assert!(!result.valid);
    assert_eq!(result.errors[0].path.as_deref(), Some("/controls/0/type"));
}

#[test]
fn test_value_control_needs_key() {
    let data = json!({"controls": [{"type": "text", "label": "No key"}]});
    let result = Validator::new().validate_definition("form.yaml", &data);
    assert!(!result.valid);
}

#[test]
fn test_decorative_controls_need_no_key() {
    let data = json!({"controls": [
        {"type": "script", "script": "init();"},
        {"type": "button", "label": "Back", "link": "/list"}
    ]});
    assert!(Validator::new().validate_definition("form.yaml", &data).valid);
}

#[test]
fn test_invalid_pattern_rule() {
    let data = json!({"controls": [{"type": "text", "key": "x", "rules": ["email", "(unclosed"]}]});
    let result = Validator::new().validate_definition("form.yaml", &data);
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path.as_deref(), Some("/controls/0/rules/1"));
}

#[test]
fn test_min_greater_than_max() {
    let data = json!({"controls": [{"type": "text", "key": "x", "min": 5, "max": 3}]});
    let result = Validator::new().validate_definition("form.yaml", &data);
    assert!(!result.valid);
    assert_eq!(result.errors[0].path.as_deref(), Some("/controls/0/min"));

    let unbounded = json!({"controls": [{"type": "text", "key": "x", "min": 5, "max": 0}]});
    assert!(Validator::new().validate_definition("form.yaml", &unbounded).valid);
}

#[test]
fn test_button_needs_label() {
    let data = json!({"controls": [{"type": "button", "label": "  ", "primary": true}]});
    let result = Validator::new().validate_definition("form.yaml", &data);
    assert!(!result.valid);
    assert_eq!(result.errors[0].path.as_deref(), Some("/controls/0/label"));
}

#[test]
fn test_format_errors() {
    let validator = Validator::new();
    let errors = vec![
        ValidationError::at("form.yaml", "/controls/0/min", "min (5) is greater than max (3)"),
        ValidationError {
            file: "form.yaml".to_string(),
            line: Some(4),
            column: Some(2),
            message: "Bad".to_string(),
            path: None,
            suggestion: Some("Fix it".to_string()),
        },
    ];
    let formatted = validator.format_errors(&errors);
    assert!(formatted.starts_with("✗ Validation failed"));
    assert!(formatted.contains("  Path: /controls/0/min"));
    assert!(formatted.contains("form.yaml:4:2"));
    assert!(formatted.contains("  Suggestion: Fix it"));
    assert!(validator.format_errors(&[]).is_empty());
}

#[test]
fn test_custom_schema() {
    let validator = Validator::with_schema(json!({"type": "object", "required": ["controls"]}));
    assert!(validator.validate_definition("f", &json!({"controls": []})).valid);
}
