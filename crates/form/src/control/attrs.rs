/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::control::group::Grouped;

/// CSS classes and inline styles of an input element.
#[derive(Debug, Clone)]
pub struct Attrs {
    pub classes: Vec<String>,
    /// Insertion ordered; setting an existing name replaces its value.
    pub styles: Vec<(String, String)>,
}

impl Default for Attrs {
    fn default() -> Self {
        Self {
            classes: vec!["form-control".to_string()],
            styles: Vec::new(),
        }
    }
}

impl Attrs {
    pub fn set_style(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.styles.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.styles.push((name, value)),
        }
    }

    pub fn has_style(&self, name: &str) -> bool {
        self.styles.iter().any(|(n, _)| n == name)
    }

    pub fn class_list(&self) -> String {
        self.classes.join(" ")
    }

    /// ` style="k:v;..."`, or nothing without styles.
    pub fn style_attr(&self) -> String {
        if self.styles.is_empty() {
            return String::new();
        }
        let body: String = self
            .styles
            .iter()
            .map(|(name, value)| format!("{name}:{value};"))
            .collect();
        format!(" style=\"{body}\"")
    }
}

/// Setters for controls with a styled input element.
pub trait Styled: Grouped {
    fn attrs_mut(&mut self) -> &mut Attrs;

    fn input_class(mut self, class: impl Into<String>) -> Self {
        self.attrs_mut().classes.push(class.into());
        self
    }

    fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs_mut().set_style(name, value);
        self
    }

    fn width(self, px: u32) -> Self {
        self.style("width", format!("{px}px"))
    }

    fn height(self, px: u32) -> Self {
        self.style("height", format!("{px}px"))
    }
}
