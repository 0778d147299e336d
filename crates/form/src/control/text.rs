/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::config::FormConfig;
use crate::control::attrs::{Attrs, Styled};
use crate::control::field::{Field, ValueControl};
use crate::control::group::{Group, Grouped};
use crate::error::FormResult;
use crate::html::{escape, readonly_attr};
use crate::naming::{dom_id, encode_name, js_ident};
use crate::scripts::{render_rich_text, RichTextScript};

const RICH_TEXT_UPLOAD_URL: &str = "attachment/upload?ke=1";
const RICH_TEXT_FILE_MANAGER_URL: &str = "attachment/file_manager";
const RICH_TEXT_STYLESHEETS: [&str; 2] = [
    "static/admin/lib/kindeditor/plugins/code/prettify.css",
    "static/admin/css/content.css",
];

/// Single line text input.
#[derive(Debug, Clone, Default)]
pub struct Text {
    pub(crate) field: Field,
    pub(crate) group: Group,
    pub(crate) attrs: Attrs,
    pub placeholder: String,
}

styled_control!(Text);

impl Text {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            field: Field::new(key),
            ..Self::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn render_input(&self) -> String {
        format!(
            "<input id=\"{}\" type=\"text\" name=\"{}\" placeholder=\"{}\" value=\"{}\" class=\"{}\"{}{} /> \n",
            dom_id(&self.field.key),
            encode_name(&self.field.key),
            escape(&self.placeholder),
            escape(&self.field.value),
            self.attrs.class_list(),
            self.attrs.style_attr(),
            readonly_attr(self.field.readonly),
        )
    }

    pub fn render(&self, config: &FormConfig) -> String {
        self.group
            .wrap(&self.field, config.locale, &self.render_input())
    }
}

/// Multi-line text input.
#[derive(Debug, Clone, Default)]
pub struct Textarea {
    pub(crate) field: Field,
    pub(crate) group: Group,
    pub(crate) attrs: Attrs,
    pub placeholder: String,
}

styled_control!(Textarea);

impl Textarea {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            field: Field::new(key),
            ..Self::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn render_input(&self) -> String {
        textarea_markup(&self.field, &self.attrs, &self.placeholder)
    }

    pub fn render(&self, config: &FormConfig) -> String {
        self.group
            .wrap(&self.field, config.locale, &self.render_input())
    }
}

fn textarea_markup(field: &Field, attrs: &Attrs, placeholder: &str) -> String {
    format!(
        "<textarea id=\"{}\" name=\"{}\" placeholder=\"{}\" class=\"{}\"{}{}>{}</textarea> \n",
        dom_id(&field.key),
        encode_name(&field.key),
        escape(placeholder),
        attrs.class_list(),
        attrs.style_attr(),
        readonly_attr(field.readonly),
        escape(&field.value),
    )
}

/// Textarea upgraded to a WYSIWYG editor in the browser.
#[derive(Debug, Clone)]
pub struct RichText {
    pub(crate) field: Field,
    pub(crate) group: Group,
    pub(crate) attrs: Attrs,
    pub placeholder: String,
    /// Image upload endpoint, resolved against the base URL.
    pub upload_url: String,
    /// File browser endpoint, resolved against the base URL.
    pub file_manager_url: String,
}

styled_control!(RichText);

impl RichText {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            field: Field::new(key),
            group: Group::default(),
            attrs: Attrs::default(),
            placeholder: String::new(),
            upload_url: RICH_TEXT_UPLOAD_URL.to_string(),
            file_manager_url: RICH_TEXT_FILE_MANAGER_URL.to_string(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = url.into();
        self
    }

    pub fn file_manager_url(mut self, url: impl Into<String>) -> Self {
        self.file_manager_url = url.into();
        self
    }

    pub fn render_input(&self, config: &FormConfig) -> FormResult<String> {
        let mut attrs = self.attrs.clone();
        if !attrs.has_style("width") {
            attrs.set_style("width", "100%");
        }
        if !attrs.has_style("height") {
            attrs.set_style("height", "500px");
        }

        let mut html = textarea_markup(&self.field, &attrs, &self.placeholder);
        let editor_var = js_ident("editor_", &self.field.key);
        let input_id = dom_id(&self.field.key);
        let upload_url = config.resolve_action_url(&self.upload_url);
        let file_manager_url = config.resolve_action_url(&self.file_manager_url);
        html.push_str(&render_rich_text(&RichTextScript {
            editor_var: &editor_var,
            input_id: &input_id,
            css_paths: RICH_TEXT_STYLESHEETS
                .iter()
                .map(|path| config.resolve_action_url(path))
                .collect(),
            upload_url: &upload_url,
            file_manager_url: &file_manager_url,
        })?);
        Ok(html)
    }

    pub fn render(&self, config: &FormConfig) -> FormResult<String> {
        Ok(self
            .group
            .wrap(&self.field, config.locale, &self.render_input(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FormConfig {
        FormConfig::new("http://h/", "http://cdn/")
    }

    #[test]
    fn test_text_render_input() {
        let text = Text::new("profile.name")
            .value("Ada <L>")
            .placeholder("Name")
            .readonly(true)
            .width(200);
        assert_eq!(
            text.render_input(),
            "<input id=\"i_profile_-_name\" type=\"text\" name=\"n_profile_-_name\" placeholder=\"Name\" value=\"Ada &lt;L&gt;\" class=\"form-control\" style=\"width:200px;\" readonly=\"readonly\" /> \n"
        );
    }

    #[test]
    fn test_text_render_shows_error() {
        let mut text = Text::new("name").label("Name").not_empty();
        text.field_mut().check_rules("");
        let html = text.render(&config());
        assert!(html.contains("has-error"));
        assert!(html.contains("<div class=\"help-block\">Required</div>"));
    }

    #[test]
    fn test_textarea_body_holds_value() {
        let textarea = Textarea::new("bio").value("line1\nline2").input_class("tall");
        let html = textarea.render_input();
        assert!(html.contains("class=\"form-control tall\""));
        assert!(html.contains(">line1\nline2</textarea>"));
    }

    #[test]
    fn test_rich_text_defaults() {
        let rich = RichText::new("post.body");
        let html = rich.render_input(&config()).unwrap();
        assert!(html.contains("style=\"width:100%;height:500px;\""));
        assert!(html.contains("var editor_post_body;"));
        assert!(html.contains("K.create('#i_post_-_body'"));
        assert!(html.contains("uploadJson: 'http://h/attachment/upload?ke=1'"));
        assert!(html.contains("fileManagerJson: 'http://h/attachment/file_manager'"));
        assert!(html.contains("'http://h/static/admin/css/content.css'"));
    }

    #[test]
    fn test_rich_text_keeps_explicit_size() {
        let rich = RichText::new("body")
            .height(300)
            .upload_url("http://files/upload");
        let html = rich.render_input(&config()).unwrap();
        assert!(html.contains("style=\"height:300px;width:100%;\""));
        assert!(html.contains("uploadJson: 'http://files/upload'"));
    }
}
