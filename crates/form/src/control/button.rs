/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::config::FormConfig;
use crate::html::escape;

/// How a button behaves. The two modes are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ButtonMode {
    /// Renders nothing until a mode is chosen.
    #[default]
    Unset,
    /// Submit button.
    Primary,
    /// Anchor to a URL, resolved against the base URL at render time.
    Link(String),
}

#[derive(Debug, Clone, Default)]
pub struct Button {
    pub name: String,
    pub mode: ButtonMode,
}

impl Button {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: ButtonMode::Unset,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Make this the submit button, dropping any link.
    pub fn primary(mut self) -> Self {
        self.mode = ButtonMode::Primary;
        self
    }

    /// Make this a link, dropping the submit role.
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.mode = ButtonMode::Link(url.into());
        self
    }

    pub fn is_primary(&self) -> bool {
        self.mode == ButtonMode::Primary
    }

    pub fn link_url(&self) -> Option<&str> {
        match &self.mode {
            ButtonMode::Link(url) => Some(url),
            _ => None,
        }
    }

    pub fn render(&self, config: &FormConfig) -> String {
        match &self.mode {
            ButtonMode::Primary => format!(
                "<button class=\"btn btn-primary\"><i class=\"fa fa-save\"></i> {}</button> \n",
                self.name
            ),
            ButtonMode::Link(url) if !url.is_empty() => format!(
                "<a href=\"{}\" class=\"btn btn-default\">{}</a> \n",
                escape(&config.resolve_action_url(url)),
                self.name
            ),
            _ => String::new(),
        }
    }
}
