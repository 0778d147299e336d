/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

#[cfg(test)]
mod tests;

use serde_json::Value;

use crate::config::FormConfig;
use crate::control::{
    Button, Checkbox, Control, Date, Hidden, Html, Placement, Radio, Render, RichText, Script,
    Select, Text, Textarea, Upload,
};
use crate::data::DataBag;
use crate::error::FormResult;
use crate::html::escape;
use crate::input::InputSource;

/// Owns a form's controls and data bag, binds submissions onto them and
/// renders the whole form.
///
/// A builder lives for one request: build it, optionally `handle` the
/// submission, then `build` the markup.
#[derive(Debug, Clone)]
pub struct FormBuilder {
    config: FormConfig,
    action: String,
    method: String,
    controls: Vec<Control>,
    data: DataBag,
    has_error: bool,
    referer: Option<String>,
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl FormBuilder {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            action: String::new(),
            method: "post".to_string(),
            controls: Vec::new(),
            data: DataBag::new(),
            has_error: false,
            referer: None,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn set_base_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.config.set_base_url(url);
        self
    }

    pub fn set_cdn_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.config.set_cdn_url(url);
        self
    }

    /// Form target, resolved against the base URL.
    pub fn action(&mut self, url: &str) -> &mut Self {
        self.action = self.config.resolve_action_url(url);
        self
    }

    pub fn action_url(&self) -> &str {
        &self.action
    }

    pub fn method(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = method.into();
        self
    }

    /// Referring page written to the synthesized `referer` field. `handle`
    /// records the submission's referer automatically.
    pub fn referer(&mut self, referer: impl Into<String>) -> &mut Self {
        self.referer = Some(referer.into());
        self
    }

    /// Append a control; insertion order is render order within its group.
    pub fn add(&mut self, control: impl Into<Control>) -> &mut Self {
        self.controls.push(control.into());
        self
    }

    /// First control carrying exactly `key`.
    pub fn get(&self, key: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.key() == Some(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.key() == Some(key))
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// The whole data bag.
    pub fn data(&self) -> &DataBag {
        &self.data
    }

    /// One top-level data entry.
    pub fn data_get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Replace the whole data bag. Non-object values empty it.
    pub fn set_data(&mut self, data: Value) -> &mut Self {
        self.data = DataBag::from_value(data);
        self
    }

    /// Assign one top-level data entry.
    pub fn set_data_value(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.data.set(key, value);
        self
    }

    /// Bind and validate a submission without a post-validation hook.
    pub fn handle(&mut self, input: &dyn InputSource) -> bool {
        self.handle_with(input, |_, _| Vec::<(String, String)>::new())
    }

    /// Bind and validate a submission.
    ///
    /// Every value-bearing control reads its field, is checked against its
    /// rules, and has the raw value written into the data bag at its key
    /// (valid or not). `callback` then sees whether errors occurred so far
    /// and the bag; any `(key, message)` pairs it returns become custom
    /// errors on the controls with that key and fail the submission.
    pub fn handle_with<F, E, K, V>(&mut self, input: &dyn InputSource, callback: F) -> bool
    where
        F: FnOnce(bool, &DataBag) -> E,
        E: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.has_error = false;
        if let Some(referer) = input.referer() {
            self.referer = Some(referer.to_string());
        }

        for control in &mut self.controls {
            let Some(raw) = control.read_input(input) else {
                continue;
            };
            let Some(field) = control.field_mut() else {
                continue;
            };
            if !field.check_rules(&raw) {
                tracing::debug!("Field '{}' rejected: {}", field.key, field.error_type());
                self.has_error = true;
            }
            self.data.insert_path(&field.key, Value::String(raw));
        }

        let mut custom_errors = callback(self.has_error, &self.data).into_iter().peekable();
        if custom_errors.peek().is_some() {
            self.has_error = true;
            for (key, message) in custom_errors {
                self.add_error(key.as_ref(), message);
            }
        }

        !self.has_error
    }

    /// Result of the last `handle`, without re-validating.
    pub fn is_success(&self) -> bool {
        !self.has_error
    }

    /// Attach a custom error to every control keyed `key`. Returns whether
    /// any control matched.
    pub fn add_error(&mut self, key: &str, message: impl Into<String>) -> bool {
        let message = message.into();
        let mut matched = false;
        for field in self.controls.iter_mut().filter_map(Control::field_mut) {
            if field.key == key {
                field.set_custom_error(message.clone());
                matched = true;
            }
        }
        if !matched {
            tracing::warn!("Unknown field '{}' in validation errors", key);
        }
        matched
    }

    /// Message shown for the first control keyed `key`, in the configured
    /// locale. `None` when no control matches.
    pub fn error_message(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(Control::field)
            .map(|field| field.error_message_in(self.config.locale))
    }

    /// Key and message of every control currently in error.
    pub fn errors(&self) -> Vec<(String, String)> {
        self.controls
            .iter()
            .filter_map(Control::field)
            .filter(|field| field.has_error())
            .map(|field| (field.key.clone(), field.error_message_in(self.config.locale)))
            .collect()
    }

    /// Render the form.
    ///
    /// Each value-bearing control first takes its value from the data bag
    /// (keeping its preset when the bag has none). Hidden fields come first,
    /// plus a `referer` field unless one was added; then the remaining
    /// controls and the buttons inside the field container.
    pub fn build(&mut self) -> FormResult<String> {
        for field in self.controls.iter_mut().filter_map(Control::field_mut) {
            if let Some(value) = self.data.lookup_text(&field.key) {
                field.value = value;
            }
        }

        let mut hidden = Vec::new();
        let mut plain = Vec::new();
        let mut buttons = Vec::new();
        for control in &self.controls {
            match control.placement() {
                Placement::Hidden => hidden.push(control),
                Placement::Plain => plain.push(control),
                Placement::Button => buttons.push(control),
            }
        }

        let mut html = format!(
            "<form action=\"{}\" method=\"{}\"> \n",
            escape(&self.action),
            escape(&self.method)
        );
        for control in &hidden {
            html.push_str(&control.render(&self.config)?);
        }
        if !hidden.iter().any(|c| c.key() == Some("referer")) {
            html.push_str(&format!(
                "<input type=\"hidden\" name=\"referer\" value=\"{}\" /> \n",
                escape(self.referer.as_deref().unwrap_or_default())
            ));
        }

        html.push_str("<div class=\"well\"> \n");
        for control in plain.iter().chain(buttons.iter()) {
            html.push_str(&control.render(&self.config)?);
        }
        html.push_str("</div> \n");
        html.push_str("</form> \n");
        Ok(html)
    }

    pub fn new_hidden(key: impl Into<String>) -> Hidden {
        Hidden::new(key)
    }

    pub fn new_text(key: impl Into<String>) -> Text {
        Text::new(key)
    }

    pub fn new_textarea(key: impl Into<String>) -> Textarea {
        Textarea::new(key)
    }

    pub fn new_rich_text(key: impl Into<String>) -> RichText {
        RichText::new(key)
    }

    pub fn new_date(key: impl Into<String>) -> Date {
        Date::new(key)
    }

    pub fn new_select(key: impl Into<String>) -> Select {
        Select::new(key)
    }

    pub fn new_radio(key: impl Into<String>) -> Radio {
        Radio::new(key)
    }

    pub fn new_checkbox(key: impl Into<String>) -> Checkbox {
        Checkbox::new(key)
    }

    pub fn new_file(key: impl Into<String>) -> Upload {
        Upload::file(key)
    }

    pub fn new_files(key: impl Into<String>) -> Upload {
        Upload::files(key)
    }

    pub fn new_image(key: impl Into<String>) -> Upload {
        Upload::image(key)
    }

    pub fn new_images(key: impl Into<String>) -> Upload {
        Upload::images(key)
    }

    pub fn new_button(name: impl Into<String>) -> Button {
        Button::new(name)
    }

    pub fn new_html(html: impl Into<String>) -> Html {
        Html::new(html)
    }

    pub fn new_script(body: impl Into<String>) -> Script {
        Script::new(body)
    }
}
