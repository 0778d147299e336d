/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde_json::Value;

use crate::error::{FormError, FormResult};

/// Read-only view of one request's submitted fields.
///
/// HTTP frameworks adapt their request body to this trait; the builder only
/// ever asks for fields by wire name.
pub trait InputSource {
    /// First value submitted under `name`.
    fn value(&self, name: &str) -> Option<&str>;

    /// Every value submitted under `name`, in submission order.
    fn values(&self, name: &str) -> Vec<&str> {
        self.value(name).into_iter().collect()
    }

    /// The request's referring page, if known.
    fn referer(&self) -> Option<&str> {
        None
    }
}

/// An in-memory submission: ordered name/value pairs plus a referer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapInput {
    fields: Vec<(String, String)>,
    referer: Option<String>,
}

impl MapInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value; repeated names accumulate.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// Build from a JSON object. String, number and boolean members become
    /// one value; arrays become repeated values. The `referer` member, if
    /// present, is taken as the referer instead of a field.
    pub fn from_json(value: &Value) -> FormResult<Self> {
        let obj = value.as_object().ok_or_else(|| {
            FormError::Definition("Submission must be a JSON object".to_string())
        })?;

        let mut input = Self::new();
        for (name, member) in obj {
            if name == "referer" {
                input.referer = scalar_text(member);
                continue;
            }
            match member {
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_text(item) {
                            input.fields.push((name.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_text(other) {
                        input.fields.push((name.clone(), text));
                    }
                }
            }
        }
        Ok(input)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl InputSource for MapInput {
    fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    fn referer(&self) -> Option<&str> {
        self.referer.as_deref()
    }
}
