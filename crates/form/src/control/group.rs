/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::control::field::{Field, ValueControl};
use crate::messages::Locale;
use crate::naming::dom_id;

/// Label, error and help-text block around an input.
#[derive(Debug, Clone)]
pub struct Group {
    pub classes: Vec<String>,
    pub remark: String,
}

impl Default for Group {
    fn default() -> Self {
        Self {
            classes: vec!["form-group".to_string()],
            remark: String::new(),
        }
    }
}

impl Group {
    /// Wrap `input` with the field's label, its error message (if any) and
    /// the remark.
    pub fn wrap(&self, field: &Field, locale: Locale, input: &str) -> String {
        let error = field.error_message_in(locale);
        let mut classes = self.classes.join(" ");
        if !error.is_empty() {
            classes.push_str(" has-error");
        }

        let mut html = format!("<div class=\"{classes}\"> \n");
        html.push_str(&format!(
            "<label class=\"control-label\" for=\"{}\">{}</label> \n",
            dom_id(&field.key),
            field.label
        ));
        html.push_str(input);
        if !error.is_empty() {
            html.push_str(&format!("<div class=\"help-block\">{error}</div> \n"));
        }
        if !self.remark.is_empty() {
            html.push_str(&format!("<div class=\"help-block\">{}</div> \n", self.remark));
        }
        html.push_str("</div> \n");
        html
    }
}

/// Setters for controls rendered inside a [`Group`].
pub trait Grouped: ValueControl {
    fn group_mut(&mut self) -> &mut Group;

    /// Help text shown under the input.
    fn remark(mut self, remark: impl Into<String>) -> Self {
        self.group_mut().remark = remark.into();
        self
    }

    fn group_class(mut self, class: impl Into<String>) -> Self {
        self.group_mut().classes.push(class.into());
        self
    }
}
