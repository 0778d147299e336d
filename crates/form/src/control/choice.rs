/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::FormConfig;
use crate::control::attrs::{Attrs, Styled};
use crate::control::field::{Field, ValueControl};
use crate::control::group::{Group, Grouped};
use crate::html::{escape, readonly_attr};
use crate::naming::{dom_id, encode_name};

/// Separator of the selected values a checkbox group binds.
pub const MULTI_VALUE_SEPARATOR: &str = ",";

/// One selectable entry: `name` is shown, `value` is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub name: String,
    pub value: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
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

/// `{name|key, value}` record, or `None` if either part is missing.
fn option_record(entry: &Value) -> Option<ChoiceOption> {
    let obj = entry.as_object()?;
    let value = obj.get("value").and_then(scalar_text)?;
    let name = obj
        .get("key")
        .or_else(|| obj.get("name"))
        .and_then(scalar_text)?;
    Some(ChoiceOption { name, value })
}

/// Normalize a loosely shaped option list.
///
/// Accepted shapes: an array of `{name, value}` (or `{key, value}`) records,
/// an array of labels (the index is the value), or an object mapping value
/// to label. Malformed entries are skipped; anything else yields no options.
pub fn normalize_options(options: &Value) -> Vec<ChoiceOption> {
    let normalized: Vec<ChoiceOption> = match options {
        Value::Array(entries) => entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry {
                Value::Object(_) => option_record(entry),
                Value::String(label) => Some(ChoiceOption::new(index.to_string(), label.clone())),
                _ => None,
            })
            .collect(),
        Value::Object(entries) => entries
            .iter()
            .filter_map(|(key, entry)| match entry {
                Value::Object(_) => option_record(entry),
                other => scalar_text(other).map(|label| ChoiceOption::new(key.clone(), label)),
            })
            .collect(),
        _ => Vec::new(),
    };

    let given = match options {
        Value::Array(entries) => entries.len(),
        Value::Object(entries) => entries.len(),
        _ => 0,
    };
    if normalized.len() < given {
        tracing::debug!(
            "Skipped {} malformed option entries",
            given - normalized.len()
        );
    }
    normalized
}

/// Setters shared by every option-list control.
pub trait Choices: Grouped {
    fn options_mut(&mut self) -> &mut Vec<ChoiceOption>;

    /// Append one option.
    fn option(mut self, value: impl Into<String>, name: impl Into<String>) -> Self {
        self.options_mut().push(ChoiceOption::new(value, name));
        self
    }

    /// Append already normalized options.
    fn options<I: IntoIterator<Item = ChoiceOption>>(mut self, options: I) -> Self {
        self.options_mut().extend(options);
        self
    }

    /// Append options from a loosely shaped JSON list, see
    /// [`normalize_options`].
    fn options_json(self, options: &Value) -> Self {
        self.options(normalize_options(options))
    }
}

macro_rules! choice_control {
    ($name:ident) => {
        impl ValueControl for $name {
            fn field(&self) -> &Field {
                &self.field
            }

            fn field_mut(&mut self) -> &mut Field {
                &mut self.field
            }
        }

        impl Grouped for $name {
            fn group_mut(&mut self) -> &mut Group {
                &mut self.group
            }
        }

        impl Choices for $name {
            fn options_mut(&mut self) -> &mut Vec<ChoiceOption> {
                &mut self.options
            }
        }

        impl $name {
            pub fn new(key: impl Into<String>) -> Self {
                Self {
                    field: Field::new(key),
                    ..Self::default()
                }
            }

            pub fn option_list(&self) -> &[ChoiceOption] {
                &self.options
            }
        }
    };
}

/// Drop-down list.
#[derive(Debug, Clone, Default)]
pub struct Select {
    pub(crate) field: Field,
    pub(crate) group: Group,
    pub(crate) attrs: Attrs,
    pub(crate) options: Vec<ChoiceOption>,
}

choice_control!(Select);

impl Styled for Select {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl Select {
    pub fn render_input(&self) -> String {
        let mut html = format!(
            "<select id=\"{}\" name=\"{}\" class=\"{}\"{}{}> \n",
            dom_id(&self.field.key),
            encode_name(&self.field.key),
            self.attrs.class_list(),
            self.attrs.style_attr(),
            readonly_attr(self.field.readonly),
        );
        for option in &self.options {
            let selected = if self.field.value == option.value {
                " selected=\"selected\""
            } else {
                ""
            };
            html.push_str(&format!(
                "<option value=\"{}\"{selected}>{}</option>\n",
                escape(&option.value),
                escape(&option.name)
            ));
        }
        html.push_str("</select> \n");
        html
    }

    pub fn render(&self, config: &FormConfig) -> String {
        self.group
            .wrap(&self.field, config.locale, &self.render_input())
    }
}

/// One choice out of a set of radio buttons.
#[derive(Debug, Clone, Default)]
pub struct Radio {
    pub(crate) field: Field,
    pub(crate) group: Group,
    pub(crate) options: Vec<ChoiceOption>,
}

choice_control!(Radio);

impl Radio {
    pub fn render_input(&self) -> String {
        let name = encode_name(&self.field.key);
        self.options
            .iter()
            .map(|option| {
                let checked = if self.field.value == option.value {
                    " checked=\"checked\""
                } else {
                    ""
                };
                format!(
                    "<label class=\"radio-inline\"><input type=\"radio\" name=\"{name}\" value=\"{}\"{checked}{} /> {}</label> \n",
                    escape(&option.value),
                    readonly_attr(self.field.readonly),
                    escape(&option.name)
                )
            })
            .collect()
    }

    pub fn render(&self, config: &FormConfig) -> String {
        self.group
            .wrap(&self.field, config.locale, &self.render_input())
    }
}

/// Any number of choices; binds as the comma-joined selected values.
#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    pub(crate) field: Field,
    pub(crate) group: Group,
    pub(crate) options: Vec<ChoiceOption>,
}

choice_control!(Checkbox);

impl Checkbox {
    pub fn selected_values(&self) -> Vec<&str> {
        self.field
            .value
            .split(MULTI_VALUE_SEPARATOR)
            .filter(|v| !v.is_empty())
            .collect()
    }

    pub fn render_input(&self) -> String {
        let name = encode_name(&self.field.key);
        let selected = self.selected_values();
        self.options
            .iter()
            .map(|option| {
                let checked = if selected.contains(&option.value.as_str()) {
                    " checked=\"checked\""
                } else {
                    ""
                };
                format!(
                    "<label class=\"checkbox-inline\"><input type=\"checkbox\" name=\"{name}\" value=\"{}\"{checked}{} /> {}</label> \n",
                    escape(&option.value),
                    readonly_attr(self.field.readonly),
                    escape(&option.name)
                )
            })
            .collect()
    }

    pub fn render(&self, config: &FormConfig) -> String {
        self.group
            .wrap(&self.field, config.locale, &self.render_input())
    }
}
