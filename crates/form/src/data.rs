/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde::Serialize;
use serde_json::{Map, Value};

/// Nested values addressed by dotted paths: `a.b.c` is `a → b → c`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DataBag {
    root: Map<String, Value>,
}

impl DataBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON object. Anything else yields an empty bag.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            _ => Self::default(),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Top-level entry, without path splitting.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Set a top-level entry, without path splitting.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.root.insert(key.into(), value);
    }

    /// Write `value` at a dotted path, creating intermediate objects as
    /// needed. Siblings along the path are left alone; an intermediate that
    /// holds a scalar is replaced by an object.
    pub fn insert_path(&mut self, path: &str, value: Value) {
        let mut segments = path.split('.').peekable();
        let mut level = &mut self.root;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                level.insert(segment.to_string(), value);
                return;
            }
            let slot = level
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            level = match slot {
                Value::Object(map) => map,
                _ => return,
            };
        }
    }

    /// Read the value at a dotted path. `null` counts as absent. When the
    /// first segment is missing, a literal top-level entry named `path` is
    /// tried instead.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let Some(mut current) = self.root.get(first) else {
            return self.root.get(path).filter(|v| !v.is_null());
        };
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        (!current.is_null()).then_some(current)
    }

    /// The value at `path` as control display text.
    pub fn lookup_text(&self, path: &str) -> Option<String> {
        self.lookup(path).map(display_text)
    }
}

/// Text shown for a bag value: strings as-is, other scalars in their JSON
/// form, arrays and objects as JSON text.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
