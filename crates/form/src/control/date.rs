/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::config::FormConfig;
use crate::control::attrs::{Attrs, Styled};
use crate::control::field::{Field, ValueControl};
use crate::control::group::{Group, Grouped};
use crate::html::{escape, readonly_attr};
use crate::naming::{dom_id, encode_name};

/// Text input enhanced by a client-side date picker. Picker options are
/// emitted as `data-date-*` attributes.
#[derive(Debug, Clone)]
pub struct Date {
    pub(crate) field: Field,
    pub(crate) group: Group,
    pub(crate) attrs: Attrs,
    pub placeholder: String,
    /// Insertion ordered picker options.
    pub options: Vec<(String, String)>,
}

styled_control!(Date);

impl Date {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            field: Field::new(key),
            group: Group::default(),
            attrs: Attrs::default(),
            placeholder: String::new(),
            options: vec![
                ("format".to_string(), "yyyy-mm-dd".to_string()),
                ("autoclose".to_string(), "true".to_string()),
            ],
        }
    }

    fn set_option(&mut self, name: String, value: String) {
        match self.options.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.options.push((name, value)),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Picker format, e.g. `yyyy-mm-dd` or `yyyy-mm`.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.set_option("format".to_string(), format.into());
        self
    }

    pub fn autoclose(mut self, autoclose: bool) -> Self {
        self.set_option("autoclose".to_string(), autoclose.to_string());
        self
    }

    /// Merge extra picker options; existing names are overwritten.
    pub fn date_options<I, K, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in options {
            self.set_option(name.into(), value.into());
        }
        self
    }

    pub fn render_input(&self) -> String {
        let mut attrs = self.attrs.clone();
        attrs.classes.push("datepicker".to_string());

        let data_attrs: String = self
            .options
            .iter()
            .map(|(name, value)| format!(" data-date-{name}=\"{}\"", escape(value)))
            .collect();

        let mut html = String::from("<div class=\"input-group date\">\n");
        html.push_str(&format!(
            "<input id=\"{}\" type=\"text\" name=\"{}\" placeholder=\"{}\" value=\"{}\" class=\"{}\"{}{}{} /> \n",
            dom_id(&self.field.key),
            encode_name(&self.field.key),
            escape(&self.placeholder),
            escape(&self.field.value),
            attrs.class_list(),
            attrs.style_attr(),
            readonly_attr(self.field.readonly),
            data_attrs,
        ));
        html.push_str("<span class=\"input-group-addon\"><i class=\"fa fa-calendar\"></i></span>\n");
        html.push_str("</div>\n");
        html
    }

    pub fn render(&self, config: &FormConfig) -> String {
        self.group
            .wrap(&self.field, config.locale, &self.render_input())
    }
}
